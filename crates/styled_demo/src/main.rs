use anyhow::{Context as _, Result, anyhow};
use bs_breakpoints::{BreakpointRegistry, bootstrap};
use log::info;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write as _};
use std::path::PathBuf;
use styled_utils::BreakpointQueryResolver;

mod page;

/// Fallback location of a breakpoint config when `--breakpoints` is not given.
const BREAKPOINTS_ENV: &str = "STYLED_BREAKPOINTS";

#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    breakpoints: Option<PathBuf>,
    output: Option<PathBuf>,
}

fn parse_args<I>(args: I) -> Result<Options>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--breakpoints" => {
                let path = args
                    .next()
                    .ok_or_else(|| anyhow!("--breakpoints expects a path"))?;
                options.breakpoints = Some(PathBuf::from(path));
            }
            "--output" => {
                let path = args
                    .next()
                    .ok_or_else(|| anyhow!("--output expects a path"))?;
                options.output = Some(PathBuf::from(path));
            }
            other => return Err(anyhow!("Unknown argument: {other}")),
        }
    }
    Ok(options)
}

/// Registry from `--breakpoints`, else from the `STYLED_BREAKPOINTS` value, else
/// the Bootstrap tiers.
fn load_registry(
    path: Option<PathBuf>,
    env_path: Option<OsString>,
) -> Result<BreakpointRegistry> {
    let Some(path) = path.or_else(|| env_path.map(PathBuf::from)) else {
        return Ok(bootstrap().clone());
    };
    BreakpointRegistry::from_json_file(&path)
        .with_context(|| format!("Failed to load breakpoints from {}", path.display()))
}

/// Render the demo page to `--output`, or to stdout.
///
/// # Errors
/// Returns an error for bad arguments, an unreadable breakpoint config, or a
/// failed write.
pub fn main() -> Result<()> {
    env_logger::init();

    let options = parse_args(env::args().skip(1))?;
    let registry = load_registry(options.breakpoints, env::var_os(BREAKPOINTS_ENV))?;
    info!("Rendering demo page over {} breakpoint tiers", registry.len());

    let resolver = BreakpointQueryResolver::new(&registry);
    let html = page::render_page(resolver).context("Failed to build the demo stylesheet")?;

    if let Some(path) = options.output {
        fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote demo page to {}", path.display());
    } else {
        io::stdout().lock().write_all(html.as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| (*arg).to_owned()).collect()
    }

    /// Tests both flags are picked up
    ///
    /// # Errors
    /// Returns an error if the arguments are rejected
    #[test]
    fn test_parse_args() -> Result<()> {
        let options = parse_args(args(&["--breakpoints", "bp.json", "--output", "out.html"]))?;
        assert_eq!(
            options,
            Options {
                breakpoints: Some(PathBuf::from("bp.json")),
                output: Some(PathBuf::from("out.html")),
            }
        );
        assert_eq!(parse_args(args(&[]))?, Options::default());
        Ok(())
    }

    /// Tests missing values and unknown flags are rejected
    #[test]
    fn test_parse_args_errors() {
        let missing = parse_args(args(&["--output"])).map_err(|err| err.to_string());
        assert_eq!(missing, Err("--output expects a path".to_owned()));
        let unknown = parse_args(args(&["--verbose"])).map_err(|err| err.to_string());
        assert_eq!(unknown, Err("Unknown argument: --verbose".to_owned()));
    }

    /// Tests a config file replaces the default tiers
    ///
    /// # Errors
    /// Returns an error if the temporary config cannot be written or loaded
    #[test]
    fn test_load_registry_from_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(
            br#"{"tiers": [{"name": "xs", "min_width": 0}, {"name": "md", "min_width": 800}, {"name": "xl", "min_width": 1300}]}"#,
        )?;
        let registry = load_registry(Some(file.path().to_path_buf()), None)?;
        assert_eq!(registry.names().collect::<Vec<_>>(), ["xs", "md", "xl"]);

        let page = page::render_page(BreakpointQueryResolver::new(&registry))?;
        assert!(page.contains("@media (min-width: 800px)"));
        assert!(page.contains("@media (max-width: 100%)"));
        assert!(page.contains("@media (min-width: 0px) and (max-width: 799px)"));
        Ok(())
    }

    /// Tests a broken config names the file it came from
    ///
    /// # Errors
    /// Returns an error if the temporary config cannot be written
    #[test]
    fn test_load_registry_invalid() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(br#"{"tiers": []}"#)?;
        let err = load_registry(Some(file.path().to_path_buf()), None)
            .err()
            .ok_or_else(|| anyhow!("empty tier list was accepted"))?;
        assert!(err.to_string().contains("Failed to load breakpoints"));
        Ok(())
    }

    /// Tests the environment value is used when no flag is given, and the flag wins
    ///
    /// # Errors
    /// Returns an error if the temporary configs cannot be written or loaded
    #[test]
    fn test_load_registry_env_fallback() -> Result<()> {
        let mut env_file = NamedTempFile::new()?;
        env_file.write_all(
            br#"{"tiers": [{"name": "phone", "min_width": 0}, {"name": "desk", "min_width": 1024}]}"#,
        )?;
        let env_path = env_file.path().as_os_str().to_owned();

        let from_env = load_registry(None, Some(env_path.clone()))?;
        assert_eq!(from_env.names().collect::<Vec<_>>(), ["phone", "desk"]);

        let mut flag_file = NamedTempFile::new()?;
        flag_file.write_all(br#"{"tiers": [{"name": "only", "min_width": 0}]}"#)?;
        let from_flag = load_registry(Some(flag_file.path().to_path_buf()), Some(env_path))?;
        assert_eq!(from_flag.names().collect::<Vec<_>>(), ["only"]);

        assert_eq!(&load_registry(None, None)?, bootstrap());
        Ok(())
    }
}
