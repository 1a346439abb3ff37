pub mod books;
pub mod home;

use smarthomie_kernel::ModuleRegistry;

/// Register all application modules with the registry
pub fn register_all(registry: &mut ModuleRegistry) {
    registry.register(home::create_module());
    registry.register(books::create_module());
}

/// Registry holding every application module, each with fresh state
pub fn registry() -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    register_all(&mut registry);
    registry
}
