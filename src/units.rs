#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Dimension(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct CellsCount(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct WallsCount(pub usize);
