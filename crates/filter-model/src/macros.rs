#[macro_export]
macro_rules! prop {
    ($name:expr) => {
        $crate::node::FilterNode::property($name)
    };
}

#[macro_export]
macro_rules! string {
    ($content:expr) => {
        $crate::node::FilterNode::string($content)
    };
}

#[macro_export]
macro_rules! cmp {
    ($op:expr, $left:expr, $right:expr) => {
        $crate::node::FilterNode::comparison($op, $left, $right)
    };
}

#[macro_export]
macro_rules! func {
    ($name:expr) => {
        $crate::node::FilterNode::function($name, Vec::new())
    };
    ($name:expr, $($arg:expr),+ $(,)?) => {
        $crate::node::FilterNode::function($name, vec![$($arg),+])
    };
}
