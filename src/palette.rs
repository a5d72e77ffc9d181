/// Fixed color table shared by every frame of an animation.
///
/// Colors are stored as RGB triples in index order. Frames hold indices into
/// this table, and the GIF encoder writes it out as the global color table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<[u8; 3]>,
}

pub const BLACK_INDEX: u8 = 0;
pub const GREEN_INDEX: u8 = 1;
pub const WHITE_INDEX: u8 = 2;
pub const BLUE_INDEX: u8 = 3;
pub const RED_INDEX: u8 = 4;

const DEFAULT_COLORS: [[u8; 3]; 5] = [
    [0, 0, 0],       // black
    [0, 255, 0],     // green
    [255, 255, 255], // white
    [0, 0, 255],     // blue
    [255, 0, 0],     // red
];

impl Palette {
    /// Build a palette from explicit RGB entries.
    ///
    /// Returns `None` for an empty list or one with more than 256 entries,
    /// since neither can be addressed by a `u8` pixel index.
    pub fn new(colors: Vec<[u8; 3]>) -> Option<Self> {
        if colors.is_empty() || colors.len() > 256 {
            return None;
        }
        Some(Self { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn color(&self, index: u8) -> Option<[u8; 3]> {
        self.colors.get(index as usize).copied()
    }

    /// Flattened `r, g, b, r, g, b, ...` bytes as the GIF encoder expects them.
    pub fn rgb_bytes(&self) -> Vec<u8> {
        self.colors.iter().flatten().copied().collect()
    }
}

impl Default for Palette {
    /// Black, green, white, blue, red.
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let p = Palette::default();
        assert_eq!(p.len(), 5);
        assert_eq!(p.color(BLACK_INDEX), Some([0, 0, 0]));
        assert_eq!(p.color(GREEN_INDEX), Some([0, 255, 0]));
        assert_eq!(p.color(WHITE_INDEX), Some([255, 255, 255]));
        assert_eq!(p.color(BLUE_INDEX), Some([0, 0, 255]));
        assert_eq!(p.color(RED_INDEX), Some([255, 0, 0]));
        assert_eq!(p.color(5), None);
    }

    #[test]
    fn test_rgb_bytes_flattened() {
        let p = Palette::new(vec![[1, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(p.rgb_bytes(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_rejects_empty() {
        assert!(Palette::new(Vec::new()).is_none());
        assert!(Palette::new(vec![[0, 0, 0]; 257]).is_none());
    }
}
