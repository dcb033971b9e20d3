mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// The report is customized with the `error` attribute:
/// ```
/// use canon_attrs::ErrorKind;
/// use canon_error::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("unknown function `{}`", name),
///     labels = ["this function"],
///     help = "try one of `sin`, `cos` or `sqrt`",
/// )]
/// pub struct UnknownFunction {
///     name: String,
/// }
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                              |
/// | ----------- | ------------------------------------------------------------------------ |
/// | `message`   | The message displayed at the top of the report.                          |
/// | `labels`    | An array of label texts, one per span, in the order the spans are given. |
/// | `help`      | Optional help text describing how the user can fix the error.            |
///
/// Each tag accepts any expression implementing [`ToString`]. For structs with named fields, the
/// fields are in scope by reference while the expressions are evaluated. Tuple structs are not
/// supported.
///
/// The generated code refers to the `ariadne` and `canon_error` crates by name, and expects the
/// [`ErrorKind`] trait to be in scope.
///
/// [`ErrorKind`]: https://docs.rs/canon-error
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl ErrorKind for #name {
            #target
        }
    }.into()
}
