//! Parsing and checking `marked!` input.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    LitStr, Result, Token,
};

const OPEN_MARKER: &str = "{<}";
const CLOSE_MARKER: &str = "{>}";
const ESCAPED_OPEN_MARKER: &str = "{{<}}";
const ESCAPED_CLOSE_MARKER: &str = "{{>}}";

/// `"template"` followed by optional `, args...` for `format!`.
pub(crate) struct MarkedTemplate {
    template: LitStr,
    args: Option<TokenStream>,
}

impl Parse for MarkedTemplate {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let template: LitStr = input.parse()?;
        if input.is_empty() {
            return Ok(Self {
                template,
                args: None,
            });
        }
        input.parse::<Token![,]>()?;
        let args: TokenStream = input.parse()?;
        Ok(Self {
            template,
            args: (!args.is_empty()).then_some(args),
        })
    }
}

impl MarkedTemplate {
    pub(crate) fn expand(&self) -> Result<TokenStream> {
        let value = self.template.value();
        check_markers(&value).map_err(|message| syn::Error::new(self.template.span(), message))?;

        let escaped = LitStr::new(
            &value
                .replace(OPEN_MARKER, ESCAPED_OPEN_MARKER)
                .replace(CLOSE_MARKER, ESCAPED_CLOSE_MARKER),
            self.template.span(),
        );
        Ok(match &self.args {
            Some(args) => quote! { ::std::format!(#escaped, #args) },
            None => quote! { ::std::format!(#escaped) },
        })
    }
}

/// Applies the runtime pairing rules: equal counts, and each open before its
/// positional close.
///
/// A marker that touches a `{` before it or a `}` after it is rejected first:
/// escaping it for `format!` would merge it with a `{{`/`}}` escape.
fn check_markers(template: &str) -> std::result::Result<(), String> {
    let bytes = template.as_bytes();
    let mut opens = Vec::new();
    let mut closes = Vec::new();
    for (offset, window) in bytes.windows(OPEN_MARKER.len()).enumerate() {
        let marker = if window == OPEN_MARKER.as_bytes() {
            opens.push(offset);
            OPEN_MARKER
        } else if window == CLOSE_MARKER.as_bytes() {
            closes.push(offset);
            CLOSE_MARKER
        } else {
            continue;
        };

        let brace_before = offset > 0 && bytes[offset - 1] == b'{';
        let brace_after = bytes.get(offset + marker.len()) == Some(&b'}');
        if brace_before || brace_after {
            return Err(format!("privacy marker `{marker}` touches a brace escape"));
        }
    }

    if opens.len() != closes.len() {
        return Err(format!(
            "unbalanced privacy markers: {} `{OPEN_MARKER}` but {} `{CLOSE_MARKER}`",
            opens.len(),
            closes.len()
        ));
    }
    if let Some(index) = opens.iter().zip(&closes).position(|(open, close)| open > close) {
        return Err(format!(
            "privacy marker pair #{} closes before it opens",
            index + 1
        ));
    }
    Ok(())
}
