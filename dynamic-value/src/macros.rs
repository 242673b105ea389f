/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// Map keys are single tokens (a literal or a parenthesized expression);
/// values are `null`, nested `[...]`/`{...}` literals, or any expression
/// with a `From` conversion into `Value`.
///
/// ```
/// use dynamic_value::dynamic;
///
/// let v = dynamic!({
///     "name": "widget",
///     "sizes": [1, -2, 3.5],
///     "meta": {"owner": null},
///     (1 + 1): true,
/// });
/// assert_eq!(
///     v.str(false),
///     r#"{"name": "widget", "sizes": [1, -2, 3.5], "meta": {"owner": null}, 2: true}"#
/// );
/// ```
#[macro_export]
macro_rules! dynamic {
    // Arrays: collect element tokens up to each comma.
    (@array $array:ident ($($elem:tt)*)) => {
        $crate::dynamic!(@push $array ($($elem)*));
    };
    (@array $array:ident ($($elem:tt)*) , $($rest:tt)*) => {
        $crate::dynamic!(@push $array ($($elem)*));
        $crate::dynamic!(@array $array () $($rest)*);
    };
    (@array $array:ident ($($elem:tt)*) $next:tt $($rest:tt)*) => {
        $crate::dynamic!(@array $array ($($elem)* $next) $($rest)*);
    };
    (@push $array:ident ()) => {};
    (@push $array:ident ($($elem:tt)+)) => {
        $array
            .push_back($crate::dynamic!($($elem)+))
            .expect("dynamic! builds arrays into an array");
    };

    // Maps: one key token, a colon, then value tokens up to the next comma.
    (@map $map:ident) => {};
    (@map $map:ident $key:tt : $($rest:tt)*) => {
        $crate::dynamic!(@entry $map $key () $($rest)*);
    };
    (@entry $map:ident $key:tt ($($val:tt)*)) => {
        $crate::dynamic!(@insert $map $key ($($val)*));
    };
    (@entry $map:ident $key:tt ($($val:tt)*) , $($rest:tt)*) => {
        $crate::dynamic!(@insert $map $key ($($val)*));
        $crate::dynamic!(@map $map $($rest)*);
    };
    (@entry $map:ident $key:tt ($($val:tt)*) $next:tt $($rest:tt)*) => {
        $crate::dynamic!(@entry $map $key ($($val)* $next) $($rest)*);
    };
    (@insert $map:ident $key:tt ($($val:tt)+)) => {
        $map.entry($crate::dynamic!($key))
            .expect("dynamic! builds maps into a map")
            .set($crate::dynamic!($($val)+));
    };

    (null) => {
        $crate::Value::null()
    };
    ([ $($tt:tt)* ]) => {{
        let array = $crate::Value::with_kind($crate::Kind::Array);
        $crate::dynamic!(@array array () $($tt)*);
        array
    }};
    ({ $($tt:tt)* }) => {{
        let map = $crate::Value::with_kind($crate::Kind::Map);
        $crate::dynamic!(@map map $($tt)*);
        map
    }};
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
