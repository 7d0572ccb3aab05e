use proc_macro::TokenStream;
use syn::{ItemImpl, parse_macro_input};

use crate::annotated::AnnotatedArgs;

mod annotated;
mod marker;

/// # `#[annotated]`
///
/// Turns the `#[marker(label = "...")]` attributes on the methods of an inherent
/// `impl` block into a `tagwrap_core::Annotated` implementation.
///
/// Every method with a receiver is listed in declaration order. Methods carrying a
/// marker become tagged entries that the scanner wraps and invokes; the rest are
/// listed as plain entries and never called.
///
/// ## Tagged method shape
///
/// - the receiver must be `&self`;
/// - the only other parameter allowed is the output stream (`&mut dyn std::io::Write`);
/// - the return type is either `()` or `Result<(), E>` where `E` converts into
///   `Box<dyn Error + Send + Sync>`.
///
/// ## Example
///
/// ```rust, ignore
/// use std::io::{self, Write};
/// use tagwrap_core::annotated;
///
/// struct Demo;
///
/// #[annotated]
/// impl Demo {
///     #[marker(label = "MyGeneratedClass")]
///     fn my_function(&self, out: &mut dyn Write) -> io::Result<()> {
///         writeln!(out, "This is the core functionality of myFunction.")
///     }
///
///     fn helper(&self) {}
/// }
/// ```
///
/// ## Arguments
///
/// - `crate = path`: path to the `tagwrap_core` crate if it was renamed.
#[proc_macro_attribute]
pub fn annotated(args: TokenStream, input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(args as AnnotatedArgs);
    let input = parse_macro_input!(input as ItemImpl);

    let expanded = match annotated::expand_annotated(args, input) {
        Ok(tokens) => tokens,
        Err(err) => return err.to_compile_error().into(),
    };

    TokenStream::from(expanded)
}
