use std::ffi::OsString;

/// Long flags that may also be spelled with a single dash
const SINGLE_DASH_LONG_FLAGS: &[&str] = &["-tmp", "-config"];

/// Rewrite `-tmp`/`-config` to `--tmp`/`--config` so clap accepts both spellings.
///
/// Everything after a bare `--` is left alone.
pub fn normalize<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut seen_separator = false;

    args.into_iter()
        .map(|arg| {
            if seen_separator {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    seen_separator = true;
                    arg
                }
                Some(flag) if SINGLE_DASH_LONG_FLAGS.contains(&flag) => {
                    OsString::from(format!("-{}", flag))
                }
                _ => arg,
            }
        })
        .collect()
}
