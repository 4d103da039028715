use anyhow::{bail, Context};
use viewtree_ui::Constraint;

use crate::Scenario;

/// Environment variable overriding the screen size, as `<width>x<height>`.
pub const SCREEN_ENV: &str = "VIEWTREE_SCREEN";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoOptions {
    pub screen_width: u32,
    pub screen_height: u32,
    pub scenarios: Vec<Scenario>,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            screen_width: 1080,
            screen_height: 1920,
            scenarios: Vec::new(),
        }
    }
}

impl DemoOptions {
    pub fn WithScreenSize(mut self, width: u32, height: u32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    /// Adds a run; once any run is added the standard runs are skipped.
    pub fn WithScenario(
        mut self,
        title: impl Into<String>,
        width: Constraint,
        height: Constraint,
    ) -> Self {
        self.scenarios.push(Scenario::new(title, width, height));
        self
    }

    /// Default options with the screen size taken from [`SCREEN_ENV`] if set.
    pub fn from_env() -> anyhow::Result<Self> {
        let options = Self::default();
        match std::env::var(SCREEN_ENV) {
            Ok(value) => {
                let (width, height) =
                    parse_screen_size(&value).with_context(|| format!("reading {SCREEN_ENV}"))?;
                Ok(options.WithScreenSize(width, height))
            }
            Err(std::env::VarError::NotPresent) => Ok(options),
            Err(err) => Err(err).context(SCREEN_ENV),
        }
    }
}

/// Parses `1080x1920` into `(1080, 1920)`.
pub fn parse_screen_size(value: &str) -> anyhow::Result<(u32, u32)> {
    let Some((width, height)) = value.trim().split_once(['x', 'X']) else {
        bail!("expected <width>x<height>, got {value:?}");
    };
    let width = width.trim().parse().context("screen width")?;
    let height = height.trim().parse().context("screen height")?;
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_screen_sizes() {
        assert_eq!(parse_screen_size("1080x1920").unwrap(), (1080, 1920));
        assert_eq!(parse_screen_size(" 300 X 250 ").unwrap(), (300, 250));
        assert!(parse_screen_size("1080").is_err());
        assert!(parse_screen_size("axb").is_err());
        assert!(parse_screen_size("-1x5").is_err());
    }

    #[test]
    fn builder_overrides_defaults() {
        let options = DemoOptions::default()
            .WithScreenSize(720, 1280)
            .WithScenario("only", Constraint::exactly(1), Constraint::exactly(2));
        assert_eq!(options.screen_width, 720);
        assert_eq!(options.screen_height, 1280);
        assert_eq!(options.scenarios.len(), 1);
    }
}
