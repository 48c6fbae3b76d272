//! Show-common command implementation.

use anyhow::Result;
use basic_lint_core::common_profile;

/// Prints the common profile as TOML.
pub fn run() -> Result<()> {
    println!("{}", render()?);
    Ok(())
}

fn render() -> Result<String> {
    Ok(toml::to_string(&common_profile())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use basic_lint_core::Profile;

    #[test]
    fn rendered_profile_can_be_used_as_profile_file() {
        let text = render().unwrap();
        assert!(text.contains("ignore = ["));
        assert!(text.contains("windows = ["));
        assert!(!text.contains("add"));
        assert_eq!(Profile::parse(&text).unwrap(), common_profile());
    }
}
