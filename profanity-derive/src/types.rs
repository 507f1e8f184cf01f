//! Type inspection for fields marked `#[censor]`.

/// Checks if a type is a bare primitive that cannot hold text.
///
/// Qualified paths, generics and aliases are not recognized, so they are left
/// for the `Censorable` bound to reject.
pub(crate) fn is_scalar_type(ty: &syn::Type) -> bool {
    let syn::Type::Path(path) = ty else {
        return false;
    };
    if path.qself.is_some() || path.path.leading_colon.is_some() || path.path.segments.len() != 1
    {
        return false;
    }
    let Some(segment) = path.path.segments.first() else {
        return false;
    };
    if !segment.arguments.is_empty() {
        return false;
    }
    matches!(
        segment.ident.to_string().as_str(),
        "i8" | "i16"
            | "i32"
            | "i64"
            | "i128"
            | "isize"
            | "u8"
            | "u16"
            | "u32"
            | "u64"
            | "u128"
            | "usize"
            | "f32"
            | "f64"
            | "bool"
            | "char"
    )
}

/// Checks if a type is a shared or mutable reference.
///
/// Censoring consumes and rebuilds the value, which a borrowed field cannot
/// take part in.
pub(crate) fn is_reference_type(ty: &syn::Type) -> bool {
    matches!(ty, syn::Type::Reference(_))
}
