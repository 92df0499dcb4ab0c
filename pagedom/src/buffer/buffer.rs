use super::Cell;
use crate::layout::Rect;

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }

    /// Copy the cells under `area` (clipped to this buffer).
    pub fn snapshot(&self, area: Rect) -> Vec<(u16, u16, Cell)> {
        let mut cells = Vec::new();
        for y in area.y..area.bottom().min(self.height) {
            for x in area.x..area.right().min(self.width) {
                cells.push((x, y, self.cells[self.index(x, y)]));
            }
        }
        cells
    }

    /// Copy rows `top..top + self.height()` of `source` into this buffer.
    pub fn blit_rows(&mut self, source: &Buffer, top: u16) {
        let width = self.width.min(source.width);
        for y in 0..self.height {
            let Some(src_y) = top.checked_add(y) else {
                break;
            };
            if src_y >= source.height {
                break;
            }
            for x in 0..width {
                if let Some(cell) = source.get(x, src_y) {
                    self.set(x, y, *cell);
                }
            }
        }
    }

    /// The characters of row `y`, with trailing blanks trimmed.
    pub fn line(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let mut line = String::with_capacity(self.width as usize);
        for x in 0..self.width {
            let cell = &self.cells[self.index(x, y)];
            if !cell.wide_continuation {
                line.push(cell.symbol);
            }
        }
        line.trim_end().to_string()
    }

    /// All rows as text, see [`Buffer::line`].
    pub fn lines(&self) -> Vec<String> {
        (0..self.height).map(|y| self.line(y)).collect()
    }
}
