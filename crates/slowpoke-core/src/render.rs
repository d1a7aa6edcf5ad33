//! Bounded `Debug` rendering for slow-call diagnostics.
//!
//! Rendering rules:
//! - Output is capped at a byte budget; formatting stops as soon as the cap is
//!   hit, so an enormous value costs at most the cap.
//! - A `Debug` impl that errors or panics yields [`UNRENDERABLE`] instead of
//!   failing the instrumented call.
//! - An argument tuple renders as its elements joined by `", "`, so a call
//!   taking `(a, b)` shows up as `name(a, b)`.

use std::any::type_name;
use std::fmt::{self, Debug, Write};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Marker appended when a rendering was cut at the byte cap.
pub const TRUNCATED_SUFFIX: &str = "...";

/// Placeholder for values whose `Debug` impl failed.
pub const UNRENDERABLE: &str = "<unrenderable>";

/// Wrapper that keeps a value out of slow-call logs.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Redacted<T>(pub T);

impl<T> Debug for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

struct Bounded {
    buf: String,
    cap: usize,
    truncated: bool,
}

impl Write for Bounded {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = self.cap.saturating_sub(self.buf.len());
        if s.len() <= room {
            self.buf.push_str(s);
            return Ok(());
        }

        let mut end = room;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        self.buf.push_str(&s[..end]);
        self.truncated = true;
        // Abort the rest of the formatting.
        Err(fmt::Error)
    }
}

/// Render `value` with `Debug`, keeping at most `cap` bytes of output.
pub fn render(value: &dyn Debug, cap: usize) -> String {
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        let mut out = Bounded {
            buf: String::new(),
            cap,
            truncated: false,
        };
        let res = write!(out, "{value:?}");
        (res, out)
    }));

    match outcome {
        Ok((Ok(()), out)) => out.buf,
        Ok((Err(_), mut out)) if out.truncated => {
            out.buf.push_str(TRUNCATED_SUFFIX);
            out.buf
        }
        _ => UNRENDERABLE.to_string(),
    }
}

/// Render an argument list for `name(args)`.
///
/// Tuples are the multi-argument form: their outer parentheses (and the
/// trailing comma of a one-tuple) are dropped. Any other value is a single
/// argument and renders as [`render`] does.
pub fn render_args<A: Debug + ?Sized>(args: &A, cap: usize) -> String {
    // Tuple type names are spelled `(..)`, unit included.
    if !type_name::<A>().starts_with('(') {
        return render(&args, cap);
    }

    // One extra byte for the opening parenthesis that gets dropped.
    let rendered = render(&args, cap.saturating_add(1));
    let Some(inner) = rendered.strip_prefix('(') else {
        return rendered;
    };
    match inner.strip_suffix(')') {
        Some(fields) => fields.strip_suffix(',').unwrap_or(fields).to_string(),
        // Cut at the cap: no closing parenthesis left to drop.
        None => inner.to_string(),
    }
}
