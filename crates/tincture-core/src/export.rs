// ABOUTME: Renders a palette as CSS custom properties, SCSS variables, Tailwind colors or JSON
// ABOUTME: Plain text renderers; role names are kebab-cased for stylesheet formats

use std::fmt::Write as _;

use serde_json::{Map, Value, json};
use tincture_types::{ColorError, ExportConfig, ExportFormat, Palette, Result};

/// Rendering options for [`export_palette`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// Selector wrapping CSS custom properties
    pub selector: String,
    /// Variable prefix, `color` gives `--color-primary`
    pub prefix: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::from(&ExportConfig::default())
    }
}

impl From<&ExportConfig> for ExportOptions {
    fn from(config: &ExportConfig) -> Self {
        Self {
            format: config.format,
            selector: config.selector.clone(),
            prefix: config.prefix.clone(),
        }
    }
}

impl ExportOptions {
    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }

    fn variable(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}-{}", self.prefix, name)
        }
    }
}

pub fn export_palette(palette: &Palette, options: &ExportOptions) -> Result<String> {
    match options.format {
        ExportFormat::Css => Ok(render_css(palette, options)),
        ExportFormat::Scss => Ok(render_scss(palette, options)),
        ExportFormat::Tailwind => render_tailwind(palette),
        ExportFormat::Json => serde_json::to_string_pretty(palette)
            .map_err(|e| ColorError::serialization(e.to_string())),
    }
}

fn render_css(palette: &Palette, options: &ExportOptions) -> String {
    let mut out = format!("{} {{\n", options.selector);
    for (role, color) in palette.iter() {
        // Writing to a String cannot fail
        let _ = writeln!(out, "  --{}: {};", options.variable(&role.kebab_name()), color);
    }
    out.push_str("}\n");
    out
}

fn render_scss(palette: &Palette, options: &ExportOptions) -> String {
    palette
        .iter()
        .map(|(role, color)| format!("${}: {};\n", options.variable(&role.kebab_name()), color))
        .collect()
}

fn render_tailwind(palette: &Palette) -> Result<String> {
    let colors: Map<String, Value> = palette
        .iter()
        .map(|(role, color)| (role.kebab_name(), Value::String(color.to_hex())))
        .collect();
    let config = json!({ "theme": { "extend": { "colors": colors } } });
    serde_json::to_string_pretty(&config).map_err(|e| ColorError::serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tincture_types::{Rgb, Role};

    fn sample() -> Palette {
        let mut palette = Palette::from_fn(|_| Rgb::new(0x11, 0x22, 0x33));
        palette.on_primary = Rgb::new(0xfa, 0xfb, 0xfc);
        palette
    }

    #[test]
    fn test_css_custom_properties() {
        let css = export_palette(&sample(), &ExportOptions::default()).unwrap();
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --color-on-primary: #fafbfc;\n"));
        assert!(css.contains("  --color-text: #112233;\n"));
        assert!(css.ends_with("}\n"));
        assert_eq!(css.lines().count(), Role::ALL.len() + 2);
    }

    #[test]
    fn test_scss_honors_prefix() {
        let options = ExportOptions {
            format: ExportFormat::Scss,
            selector: String::new(),
            prefix: "brand".to_string(),
        };
        let scss = export_palette(&sample(), &options).unwrap();
        assert!(scss.contains("$brand-on-primary: #fafbfc;"));
        assert_eq!(scss.lines().count(), Role::ALL.len());
    }

    #[test]
    fn test_tailwind_colors_object() {
        let options = ExportOptions::default().with_format(ExportFormat::Tailwind);
        let out = export_palette(&sample(), &options).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["theme"]["extend"]["colors"]["on-primary"], "#fafbfc");
        assert_eq!(
            value["theme"]["extend"]["colors"].as_object().unwrap().len(),
            Role::ALL.len()
        );
    }

    #[test]
    fn test_json_uses_role_names() {
        let options = ExportOptions::default().with_format(ExportFormat::Json);
        let out = export_palette(&sample(), &options).unwrap();
        let back: Palette = serde_json::from_str(&out).unwrap();
        assert_eq!(back, sample());
        assert!(out.contains("\"onPrimary\": \"#fafbfc\""));
    }
}
