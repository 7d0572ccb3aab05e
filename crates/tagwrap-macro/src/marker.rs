use syn::{Attribute, LitStr, Meta};

/// Attribute name read from method definitions.
pub(crate) const MARKER_ATTR: &str = "marker";

/// Remove every `#[marker(...)]` from `attrs` and return the declared label.
///
/// A method carries at most one marker and the marker carries exactly one
/// non-empty `label`.
pub(crate) fn take_marker(attrs: &mut Vec<Attribute>) -> syn::Result<Option<LitStr>> {
    let mut found: Option<(Attribute, LitStr)> = None;
    let mut kept = Vec::with_capacity(attrs.len());

    for attr in attrs.drain(..) {
        if !attr.path().is_ident(MARKER_ATTR) {
            kept.push(attr);
            continue;
        }
        if let Some((first, _)) = &found {
            let mut err = syn::Error::new_spanned(&attr, "a method can carry only one `#[marker]`");
            err.combine(syn::Error::new_spanned(first, "first `#[marker]` is here"));
            return Err(err);
        }
        let label = parse_label(&attr)?;
        found = Some((attr, label));
    }

    *attrs = kept;
    Ok(found.map(|(_, label)| label))
}

fn parse_label(attr: &Attribute) -> syn::Result<LitStr> {
    if !matches!(attr.meta, Meta::List(_)) {
        return Err(syn::Error::new_spanned(
            attr,
            "expected `#[marker(label = \"...\")]`",
        ));
    }

    let mut label: Option<LitStr> = None;
    attr.parse_nested_meta(|meta| {
        if !meta.path.is_ident("label") {
            return Err(meta.error("unknown marker argument, expected `label`"));
        }
        if label.is_some() {
            return Err(meta.error("duplicate `label` argument"));
        }
        let value: LitStr = meta.value()?.parse()?;
        label = Some(value);
        Ok(())
    })?;

    let label = label.ok_or_else(|| {
        syn::Error::new_spanned(attr, "missing `label` argument in `#[marker(...)]`")
    })?;
    if label.value().trim().is_empty() {
        return Err(syn::Error::new_spanned(&label, "marker label must not be empty"));
    }
    Ok(label)
}
