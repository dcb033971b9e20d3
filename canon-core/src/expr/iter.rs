use super::Expr;

/// An iterator that traverses an expression tree in left-to-right post-order, using an explicit
/// stack instead of recursion.
///
/// This iterator is created by [`Expr::post_order_iter`].
pub struct ExprIter<'a> {
    stack: Vec<&'a Expr>,
    last_visited: Option<&'a Expr>,
}

impl<'a> ExprIter<'a> {
    pub fn new(expr: &'a Expr) -> Self {
        Self {
            stack: vec![expr],
            last_visited: None,
        }
    }

    /// Pops the top of the stack and marks it as visited.
    fn visit(&mut self) -> Option<&'a Expr> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if `expr` is the slot that was visited last.
    ///
    /// Slots are compared by address rather than by node, since the same node can be shared by
    /// several parents.
    fn is_last_visited(&self, expr: &'a Expr) -> bool {
        self.last_visited.map_or(false, |last| std::ptr::eq(last, expr))
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let expr = *self.stack.last()?;
            match expr.children().last() {
                Some(last_child) if !self.is_last_visited(last_child) => {
                    self.stack.extend(expr.children().iter().rev());
                },
                _ => return self.visit(),
            }
        }
    }
}
