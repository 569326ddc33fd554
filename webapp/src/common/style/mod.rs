use constcat::concat;

mod components;
mod landing;
mod variables;

pub use components::BASE_COMPONENTS;
pub use landing::LANDING_STYLES;
pub use variables::CSS_VARIABLES;

pub const PAGE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
}

a {
  color: inherit;
  text-decoration: none;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    LANDING_STYLES,
);
