/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Construct a [RaggedArray2](crate::ragged::RaggedArray2) from nested lists of flat rings, a
/// `null` entry is a null geometry. Rings are stored as written (no re-orientation).
///
/// # Examples
///
/// ```
/// # use flatgeom::ragged_array;
/// let array = ragged_array![
///     [[0.0, 0.0, 1.0, 0.0, 1.0, 1.0]],
///     null,
///     [[0.0, 0.0, 2.0, 0.0, 2.0, 2.0], [0.5, 0.5, 1.0, 0.5, 1.0, 1.0]],
/// ];
/// assert_eq!(array.len(), 3);
/// assert_eq!(array.geom_offsets(), &[0, 1, 1, 3]);
/// assert_eq!(array.null_mask(), Some(&[false, true, false][..]));
/// ```
#[macro_export]
macro_rules! ragged_array {
    (@geometry null) => {
        None
    };
    (@geometry [$( [$( $v:expr ),* $(,)?] ),* $(,)?]) => {
        Some(vec![$( vec![$( $v ),*] ),*])
    };
    ($( $g:tt ),* $(,)?) => {
        {
            let geometries: Vec<Option<Vec<Vec<_>>>> = vec![$( $crate::ragged_array!(@geometry $g) ),*];
            $crate::ragged::RaggedArray2::from_nested(geometries, false)
                .expect("ragged_array! rings must hold x, y pairs")
        }
    };
}
