use crate::table::MethodTable;

/// Types that can describe their own methods.
///
/// Usually implemented by `#[annotated]` on an inherent `impl` block,
/// which lists methods in declaration order.
pub trait Annotated: Sized + 'static {
    /// Build the method table for this type.
    fn method_table() -> MethodTable<Self>;
}
