/// Builds an [`Ini`](crate::Ini) from a literal layout.
///
/// Sections and items are created in the order written. Repeating an item name
/// overwrites its value.
///
/// # Examples
///
/// ```rust
/// use ini_doc::ini;
///
/// let config = ini! {
///     "server" => {
///         "host" => "127.0.0.1",
///         "port" => "8080",
///     },
///     "empty" => {},
/// };
///
/// assert_eq!(config.sections(), vec!["server", "empty"]);
/// assert_eq!(config.get("server", "port"), Some("8080"));
/// ```
#[macro_export]
macro_rules! ini {
    // Handle empty document
    () => {
        $crate::Ini::new()
    };

    // Handle sections with items
    ($($section:expr => { $($item:expr => $value:expr),* $(,)? }),+ $(,)?) => {{
        let mut ini = $crate::Ini::new();
        $(
            let section: &str = &$section;
            let _ = ini.add_section(section);
            $(
                ini.set_or_create(section, &$item, &$value);
            )*
        )+
        ini
    }};
}
