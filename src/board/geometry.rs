use crate::core::coord::Coord;

/// The set of cells that exist on a board.
///
/// Boards are not assumed rectangular: rows may have different lengths and
/// individual cells may be missing. Internally we store a dense lookup table
/// over the bounding box, so converting `Coord -> cell index` is O(1).
///
/// Cells are kept in board order: by row (`y`), then by file (`x`).
#[derive(Clone, Debug)]
pub struct Geometry {
    coords: Vec<Coord>,
    min_x: i32,
    min_y: i32,
    width: i32,
    height: i32,
    lookup: Vec<u32>,
}

impl Geometry {
    /// A `width` x `height` rectangle with its top-left cell at the origin.
    pub fn rectangle(width: i32, height: i32) -> Self {
        let mut coords = Vec::new();
        for y in 0..height {
            for x in 0..width {
                coords.push(Coord::new(x, y));
            }
        }
        Self::from_coords(coords)
    }

    /// Left-aligned rows: row `y` has cells `0..row_lengths[y]`.
    pub fn from_row_lengths(row_lengths: &[usize]) -> Self {
        let mut coords = Vec::new();
        for (y, &len) in row_lengths.iter().enumerate() {
            for x in 0..len {
                coords.push(Coord::new(x as i32, y as i32));
            }
        }
        Self::from_coords(coords)
    }

    pub fn from_coords(coords: impl IntoIterator<Item = Coord>) -> Self {
        let mut coords: Vec<Coord> = coords.into_iter().collect();
        coords.sort_by_key(|c| (c.y, c.x));
        coords.dedup();

        if coords.is_empty() {
            return Self {
                coords,
                min_x: 0,
                min_y: 0,
                width: 0,
                height: 0,
                lookup: Vec::new(),
            };
        }

        let (mut min_x, mut max_x) = (i32::MAX, i32::MIN);
        let (mut min_y, mut max_y) = (i32::MAX, i32::MIN);
        for c in &coords {
            min_x = min_x.min(c.x);
            max_x = max_x.max(c.x);
            min_y = min_y.min(c.y);
            max_y = max_y.max(c.y);
        }

        let width = max_x - min_x + 1;
        let height = max_y - min_y + 1;
        let mut lookup = vec![u32::MAX; (width as usize) * (height as usize)];

        for (i, c) in coords.iter().enumerate() {
            let dx = (c.x - min_x) as usize;
            let dy = (c.y - min_y) as usize;
            lookup[dy * (width as usize) + dx] = i as u32;
        }

        Self {
            coords,
            min_x,
            min_y,
            width,
            height,
            lookup,
        }
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// All cells in board order.
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// The coordinate for a cell index.
    pub fn coord_of(&self, index: usize) -> Coord {
        self.coords[index]
    }

    /// Returns the cell index for this coordinate if it is on the board.
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        if coord.x < self.min_x
            || coord.y < self.min_y
            || coord.x >= self.min_x + self.width
            || coord.y >= self.min_y + self.height
        {
            return None;
        }
        let dx = (coord.x - self.min_x) as usize;
        let dy = (coord.y - self.min_y) as usize;
        let v = self.lookup[dy * (self.width as usize) + dx];
        if v == u32::MAX {
            None
        } else {
            Some(v as usize)
        }
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        self.index_of(coord).is_some()
    }
}
