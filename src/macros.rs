/// Builds a [`Value`](crate::Value) from JSON-shaped literal syntax.
///
/// Arrays and objects allocate fresh composite handles; nesting works to any
/// depth. Anything that is not a literal array/object/null/bool falls back
/// to [`Value::from`](crate::Value).
///
/// # Examples
///
/// ```rust
/// use keycase::{value, Value};
///
/// let doc = value!({
///     "user_name": "Alice",
///     "login_count": 3,
///     "roles": ["admin", "ops"]
/// });
/// assert!(doc.is_object());
/// assert_eq!(value!(null), Value::Null);
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::array(vec![])
    };

    ([ $($element:tt),* $(,)? ]) => {
        $crate::Value::array(vec![$($crate::value!($element)),*])
    };

    ({}) => {
        $crate::Value::object($crate::KeyMap::new())
    };

    ({ $($key:literal : $val:tt),* $(,)? }) => {{
        let mut map = $crate::KeyMap::new();
        $(
            map.insert($key.to_string(), $crate::value!($val));
        )*
        $crate::Value::object(map)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}
