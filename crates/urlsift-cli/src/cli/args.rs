//! Accept single-dash long flags (`-urls`, `-nd`, `-timeout=5`).

use std::ffi::OsString;

/// Long flags that may be spelled with one dash.
const LONG_FLAGS: &[&str] = &[
    "urls",
    "concurrency",
    "nd",
    "no-errors",
    "timeout",
    "connect-timeout",
    "verify-tls",
    "user-agent",
    "config",
];

/// Flags whose value is the next argument (when not given with `=`).
const TAKES_VALUE: &[&str] = &[
    "c",
    "urls",
    "concurrency",
    "timeout",
    "connect-timeout",
    "user-agent",
    "config",
];

/// Rewrite `-name` / `-name=value` to `--name` / `--name=value` for known long
/// flags. Values, `--` and everything after it are left alone.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut args = args.into_iter();
    if let Some(bin) = args.next() {
        out.push(bin);
    }

    let mut value_next = false;
    let mut passthrough = false;
    for arg in args {
        if passthrough || value_next {
            value_next = false;
            out.push(arg);
            continue;
        }
        let Some(s) = arg.to_str() else {
            out.push(arg);
            continue;
        };
        if s == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }
        let (dashes, rest) = if let Some(r) = s.strip_prefix("--") {
            ("--", r)
        } else if let Some(r) = s.strip_prefix('-') {
            ("-", r)
        } else {
            out.push(arg);
            continue;
        };
        let (name, has_inline_value) = match rest.split_once('=') {
            Some((n, _)) => (n, true),
            None => (rest, false),
        };
        value_next = !has_inline_value && TAKES_VALUE.contains(&name);
        if dashes == "-" && LONG_FLAGS.contains(&name) {
            out.push(OsString::from(format!("-{}", s)));
        } else {
            out.push(arg);
        }
    }
    out
}
