//! Macros for ergonomic registry construction.

/// Build a [`StateRegistry`](crate::registry::StateRegistry) from
/// `key => factory` pairs.
///
/// Expands to the builder chain and evaluates to its
/// `Result<StateRegistry, BuildError>`.
///
/// # Example
///
/// ```
/// use screenflip::registry;
/// use screenflip::screens::{MainMenu, Scene};
///
/// let registry = registry! {
///     "MAIN" => MainMenu::default,
///     "SCENE" => Scene::default,
/// }
/// .unwrap();
///
/// assert_eq!(registry.len(), 2);
/// ```
#[macro_export]
macro_rules! registry {
    (
        $($key:expr => $factory:expr),* $(,)?
    ) => {
        $crate::registry::RegistryBuilder::new()
            $(.state($key, $factory))*
            .build()
    };
}
