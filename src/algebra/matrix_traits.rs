/// Dimension queries for matrix types
pub trait ShapedMatrix {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}
