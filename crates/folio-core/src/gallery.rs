//! Gallery layout selection.
//!
//! The layout is a pure function of the image count and the gallery's
//! [`LayoutHint`]:
//!
//! - one image renders full width; print items are framed and size-capped
//! - two or more render a grid with one cell per image; print items use a
//!   1/2 column grid on framed cells, everything else a 2/3 column grid
//! - no images render nothing

use serde::Serialize;

use crate::model::LayoutHint;

/// Column counts for a gallery grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridColumns {
    /// Columns on narrow viewports.
    pub base: u8,
    /// Columns from the `md` breakpoint up.
    pub md: u8,
}

/// How a list of images is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum GalleryLayout {
    /// Nothing to show.
    Empty,
    /// A single full-width image.
    Single {
        /// Framed on a tinted panel and size-capped (print matter).
        framed: bool,
    },
    /// A grid with one cell per image.
    Grid {
        /// Column counts.
        columns: GridColumns,
        /// Framed cells with padding (print matter).
        framed: bool,
        /// Number of cells, equal to the image count.
        cells: usize,
    },
}

impl GalleryLayout {
    /// Number of image elements the layout renders.
    pub fn cell_count(&self) -> usize {
        match self {
            GalleryLayout::Empty => 0,
            GalleryLayout::Single { .. } => 1,
            GalleryLayout::Grid { cells, .. } => *cells,
        }
    }
}

const PRINT_COLUMNS: GridColumns = GridColumns { base: 1, md: 2 };
const ARTWORK_COLUMNS: GridColumns = GridColumns { base: 2, md: 3 };

/// Choose a layout for `images` under `hint`.
pub fn select_layout<S: AsRef<str>>(images: &[S], hint: LayoutHint) -> GalleryLayout {
    let framed = hint == LayoutHint::Print;
    match images.len() {
        0 => GalleryLayout::Empty,
        1 => GalleryLayout::Single { framed },
        cells => GalleryLayout::Grid {
            columns: if framed {
                PRINT_COLUMNS
            } else {
                ARTWORK_COLUMNS
            },
            framed,
            cells,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const HINTS: [LayoutHint; 4] = [
        LayoutHint::Hero,
        LayoutHint::Artworks,
        LayoutHint::Print,
        LayoutHint::Default,
    ];

    #[test]
    fn test_empty_list_renders_nothing() {
        let images: [&str; 0] = [];
        assert_eq!(select_layout(&images, LayoutHint::Print), GalleryLayout::Empty);
    }

    #[test]
    fn test_single_image_is_full_width() {
        for hint in HINTS {
            let layout = select_layout(&["images/logo.jpg"], hint);
            assert_eq!(
                layout,
                GalleryLayout::Single {
                    framed: hint == LayoutHint::Print
                }
            );
            assert_eq!(layout.cell_count(), 1);
        }
    }

    #[test]
    fn test_print_grid_columns() {
        let layout = select_layout(&["a.png", "b.png"], LayoutHint::Print);
        assert_eq!(
            layout,
            GalleryLayout::Grid {
                columns: GridColumns { base: 1, md: 2 },
                framed: true,
                cells: 2,
            }
        );
    }

    #[test]
    fn test_artwork_grid_columns() {
        let layout = select_layout(&["a.jpg", "b.jpg", "c.jpg"], LayoutHint::Artworks);
        assert_eq!(
            layout,
            GalleryLayout::Grid {
                columns: GridColumns { base: 2, md: 3 },
                framed: false,
                cells: 3,
            }
        );
    }

    #[test]
    fn test_default_hint_matches_artworks() {
        let images = ["a.jpg", "b.jpg"];
        let default = select_layout(&images, LayoutHint::Default);
        let artworks = select_layout(&images, LayoutHint::Artworks);
        assert_eq!(default, artworks);
    }

    proptest! {
        #[test]
        fn prop_cell_count_equals_input_length(len in 0usize..32, hint_idx in 0usize..4) {
            let images: Vec<String> = (0..len).map(|i| format!("images/{i}.png")).collect();
            let layout = select_layout(&images, HINTS[hint_idx]);
            prop_assert_eq!(layout.cell_count(), len);
            if len >= 2 {
                let is_grid = matches!(layout, GalleryLayout::Grid { .. });
                prop_assert!(is_grid);
            }
        }
    }
}
