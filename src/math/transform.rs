use glam::{DMat4, DVec3};

/// Model transform stack with GL-style post-multiplication.
///
/// Every `translate`/`scale`/`rotate_*` call composes onto the top matrix,
/// so the last transform issued is the first one applied to a vertex.
/// Nested scopes go through [`TransformStack::scoped`], which restores the
/// previous matrix on every exit path.
#[derive(Debug, Clone)]
pub struct TransformStack {
    current: DMat4,
    saved: Vec<DMat4>,
}

impl TransformStack {
    pub fn new() -> Self {
        Self {
            current: DMat4::IDENTITY,
            saved: Vec::new(),
        }
    }

    pub fn current(&self) -> DMat4 {
        self.current
    }

    /// Number of open scopes.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn translate(&mut self, x: f64, y: f64, z: f64) {
        self.current *= DMat4::from_translation(DVec3::new(x, y, z));
    }

    pub fn scale(&mut self, x: f64, y: f64, z: f64) {
        self.current *= DMat4::from_scale(DVec3::new(x, y, z));
    }

    pub fn rotate_x(&mut self, degrees: f64) {
        self.current *= DMat4::from_rotation_x(degrees.to_radians());
    }

    pub fn rotate_y(&mut self, degrees: f64) {
        self.current *= DMat4::from_rotation_y(degrees.to_radians());
    }

    pub fn rotate_z(&mut self, degrees: f64) {
        self.current *= DMat4::from_rotation_z(degrees.to_radians());
    }

    pub fn apply(&self, point: DVec3) -> DVec3 {
        self.current.transform_point3(point)
    }

    /// Run `f` inside a pushed copy of the current matrix, then pop it.
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.push();
        let result = f(self);
        self.pop();
        result
    }

    pub(crate) fn push(&mut self) {
        self.saved.push(self.current);
    }

    /// Popping an empty stack resets to identity in release builds.
    pub(crate) fn pop(&mut self) {
        debug_assert!(!self.saved.is_empty(), "unbalanced transform pop");
        self.current = self.saved.pop().unwrap_or(DMat4::IDENTITY);
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: DVec3, b: DVec3) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn test_scoped_restores_matrix() {
        let mut stack = TransformStack::new();
        stack.translate(1.0, 2.0, 3.0);
        let before = stack.current();

        stack.scoped(|s| {
            s.scale(5.0, 5.0, 5.0);
            s.scoped(|inner| inner.rotate_y(90.0));
            assert_eq!(s.depth(), 1);
        });

        assert_eq!(stack.current(), before);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_last_transform_applies_first() {
        let mut stack = TransformStack::new();
        stack.scale(2.0, 2.0, 2.0);
        stack.translate(1.0, 0.0, 0.0);

        // (1,0,0) + (1,0,0) then doubled
        assert!(approx(stack.apply(DVec3::new(1.0, 0.0, 0.0)), DVec3::new(4.0, 0.0, 0.0)));
    }

    #[test]
    fn test_rotate_y_quarter_turn() {
        let mut stack = TransformStack::new();
        stack.rotate_y(90.0);
        assert!(approx(stack.apply(DVec3::Z), DVec3::X));
    }

    #[test]
    fn test_scoped_returns_value() {
        let mut stack = TransformStack::new();
        let p = stack.scoped(|s| {
            s.translate(0.0, 7.0, 0.0);
            s.apply(DVec3::ZERO)
        });
        assert!(approx(p, DVec3::new(0.0, 7.0, 0.0)));
        assert!(approx(stack.apply(DVec3::ZERO), DVec3::ZERO));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "unbalanced transform pop")]
    fn test_unbalanced_pop_is_caught() {
        let mut stack = TransformStack::new();
        stack.push();
        stack.pop();
        stack.pop();
    }
}
