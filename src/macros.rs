/// Builds a [`crate::Node`] tree from JSON-like syntax.
///
/// Useful in tests and demos where constructing the tree by hand through
/// [`crate::NodeMap::insert`] would be noisy.
#[macro_export]
macro_rules! node {
    (null) => {
        $crate::Node::Null
    };

    (true) => {
        $crate::Node::Bool(true)
    };

    (false) => {
        $crate::Node::Bool(false)
    };

    ([]) => {
        $crate::Node::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Node::Array(vec![$($crate::node!($elem)),*])
    };

    ({}) => {
        $crate::Node::Object($crate::NodeMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::NodeMap::new();
        $(
            object.insert($key.to_string(), $crate::node!($value));
        )*
        $crate::Node::Object(object)
    }};

    // Fallback: any expression convertible into a Node.
    ($value:expr) => {
        $crate::Node::from($value)
    };
}
