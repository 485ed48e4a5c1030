//! The uniform Cartesian mesh descriptor.

use crate::error::GridError;
use crate::side::Side;
use indexmap::IndexMap;
use smallvec::SmallVec;

/// An immutable uniform Cartesian mesh in 1 or 2 dimensions.
///
/// Owns the geometry (`shape`, `spacing`, `origin`), the derived cell-center
/// and face coordinate arrays, and the flat-index tables that boundary
/// conditions consume. Everything is computed at construction; nothing is
/// mutated afterwards, so a grid can be shared freely by reference.
///
/// # Examples
///
/// ```
/// use littoral_grid::{Side, UniformGrid};
///
/// let grid = UniformGrid::new(&[4, 3], &[0.5, 0.5]).unwrap();
/// assert_eq!(grid.ndim(), 2);
/// assert_eq!(grid.cell_count(), 12);
///
/// // The west strip holds one cell per row of the y-axis.
/// assert_eq!(grid.boundary_indices(Side::West).unwrap(), &[0, 1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct UniformGrid {
    shape: SmallVec<[usize; 2]>,
    spacing: SmallVec<[f64; 2]>,
    origin: SmallVec<[f64; 2]>,
    centers: Vec<Vec<f64>>,
    faces: Vec<Vec<f64>>,
    boundary: IndexMap<Side, Vec<usize>>,
    sponge: IndexMap<Side, Vec<usize>>,
    neumann: IndexMap<Side, (Vec<usize>, Vec<usize>)>,
}

impl UniformGrid {
    /// Create a grid with the origin at zero.
    ///
    /// `shape` and `spacing` must have matching length 1 or 2, every shape
    /// element must be at least one cell, and every spacing must be a
    /// positive finite number.
    pub fn new(shape: &[usize], spacing: &[f64]) -> Result<Self, GridError> {
        let origin: SmallVec<[f64; 2]> = shape.iter().map(|_| 0.0).collect();
        Self::with_origin(shape, spacing, &origin)
    }

    /// Create a grid with an explicit per-axis coordinate origin.
    pub fn with_origin(shape: &[usize], spacing: &[f64], origin: &[f64]) -> Result<Self, GridError> {
        let ndim = shape.len();
        if ndim == 0 || ndim > 2 {
            return Err(GridError::UnsupportedDimension { ndim });
        }
        if spacing.len() != ndim {
            return Err(GridError::LengthMismatch {
                shape_len: ndim,
                other_len: spacing.len(),
                what: "spacing",
            });
        }
        if origin.len() != ndim {
            return Err(GridError::LengthMismatch {
                shape_len: ndim,
                other_len: origin.len(),
                what: "origin",
            });
        }
        for (axis, &n) in shape.iter().enumerate() {
            if n == 0 {
                return Err(GridError::EmptyAxis { axis });
            }
        }
        for (axis, &d) in spacing.iter().enumerate() {
            if !(d.is_finite() && d > 0.0) {
                return Err(GridError::NonPositiveSpacing { axis, value: d });
            }
        }

        let shape: SmallVec<[usize; 2]> = shape.iter().copied().collect();
        let spacing: SmallVec<[f64; 2]> = spacing.iter().copied().collect();
        let origin: SmallVec<[f64; 2]> = origin.iter().copied().collect();

        let centers = mesh_centers(&shape, &spacing, &origin);
        let faces = mesh_faces(&shape, &spacing, &origin);
        let boundary = boundary_tables(&shape);
        let sponge = boundary.clone();
        let neumann = neumann_tables(&shape, &boundary);

        Ok(Self {
            shape,
            spacing,
            origin,
            centers,
            faces,
            boundary,
            sponge,
            neumann,
        })
    }

    /// Widen one side's sponge strip to `width` cells measured inward from
    /// the boundary, replacing the default single-cell strip.
    ///
    /// This is a construction-time builder: once the grid is in use its
    /// index tables are never mutated. `width` must be at least 1 and no
    /// larger than the cell count across the side's normal axis.
    pub fn with_sponge_width(mut self, side: Side, width: usize) -> Result<Self, GridError> {
        if !self.boundary.contains_key(&side) {
            return Err(GridError::UnknownSide {
                side: side.to_string(),
            });
        }
        let extent = self.shape[side.axis()];
        if width == 0 || width > extent {
            return Err(GridError::InvalidSpongeWidth { width, extent });
        }

        let mut strip = Vec::new();
        match self.shape.as_slice() {
            &[n] => {
                let range = if side.is_lower() {
                    0..width
                } else {
                    n - width..n
                };
                strip.extend(range);
            }
            &[nx, ny] => {
                let (i_range, j_range) = match side {
                    Side::West => (0..width, 0..ny),
                    Side::East => (nx - width..nx, 0..ny),
                    Side::South => (0..nx, 0..width),
                    Side::North => (0..nx, ny - width..ny),
                };
                for i in i_range {
                    for j in j_range.clone() {
                        strip.push(i * ny + j);
                    }
                }
            }
            _ => unreachable!("construction rejects ndim outside 1..=2"),
        }
        self.sponge.insert(side, strip);
        Ok(self)
    }

    /// Number of spatial dimensions (1 or 2).
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Per-axis cell counts.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Per-axis cell sizes.
    pub fn spacing(&self) -> &[f64] {
        &self.spacing
    }

    /// Per-axis coordinate origin (position of the low corner).
    pub fn origin(&self) -> &[f64] {
        &self.origin
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.shape.iter().product()
    }

    /// Volume (area in 2D, length in 1D) of a single cell.
    pub fn cell_volume(&self) -> f64 {
        self.spacing.iter().product()
    }

    /// Meshed cell-center coordinates along `axis`, one entry per cell in
    /// flat row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= ndim()`.
    pub fn centers(&self, axis: usize) -> &[f64] {
        &self.centers[axis]
    }

    /// Meshed face coordinates along `axis`, one entry per face-lattice
    /// node (`∏ (n_i + 1)` entries) in flat row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= ndim()`.
    pub fn faces(&self, axis: usize) -> &[f64] {
        &self.faces[axis]
    }

    /// The sides defined for this grid, in canonical order.
    pub fn sides(&self) -> &'static [Side] {
        if self.ndim() == 1 {
            &Side::ALL_1D
        } else {
            &Side::ALL_2D
        }
    }

    /// Flat indices of the cells on `side`, in ascending order.
    ///
    /// Fails with [`GridError::UnknownSide`] for a side this grid does not
    /// define (south/north on a 1D grid).
    pub fn boundary_indices(&self, side: Side) -> Result<&[usize], GridError> {
        self.boundary
            .get(&side)
            .map(Vec::as_slice)
            .ok_or_else(|| GridError::UnknownSide {
                side: side.to_string(),
            })
    }

    /// Flat indices of the sponge strip on `side`.
    ///
    /// Defaults to the boundary strip; see [`with_sponge_width`](Self::with_sponge_width).
    pub fn sponge_indices(&self, side: Side) -> Result<&[usize], GridError> {
        self.sponge
            .get(&side)
            .map(Vec::as_slice)
            .ok_or_else(|| GridError::UnknownSide {
                side: side.to_string(),
            })
    }

    /// Paired `(boundary, one-cell-inward)` flat indices for `side`, used
    /// by gradient (Neumann) boundary conditions.
    ///
    /// The k-th boundary cell is paired with the k-th interior cell, offset
    /// by one stride along the side's inward normal. A side whose normal
    /// axis is a single cell thick has no interior to pair with and fails
    /// with [`GridError::NoInteriorNeighbor`].
    pub fn neumann_indices(&self, side: Side) -> Result<(&[usize], &[usize]), GridError> {
        if !self.boundary.contains_key(&side) {
            return Err(GridError::UnknownSide {
                side: side.to_string(),
            });
        }
        self.neumann
            .get(&side)
            .map(|(bd, inner)| (bd.as_slice(), inner.as_slice()))
            .ok_or_else(|| GridError::NoInteriorNeighbor {
                side: side.to_string(),
            })
    }
}

/// Meshed cell-center coordinate arrays, one per axis.
fn mesh_centers(shape: &[usize], spacing: &[f64], origin: &[f64]) -> Vec<Vec<f64>> {
    let coord = |axis: usize, k: usize| origin[axis] + (k as f64 + 0.5) * spacing[axis];
    mesh(shape, coord, 0)
}

/// Meshed face coordinate arrays over the `(n + 1)`-node face lattice.
fn mesh_faces(shape: &[usize], spacing: &[f64], origin: &[f64]) -> Vec<Vec<f64>> {
    let coord = |axis: usize, k: usize| origin[axis] + k as f64 * spacing[axis];
    mesh(shape, coord, 1)
}

fn mesh(shape: &[usize], coord: impl Fn(usize, usize) -> f64, pad: usize) -> Vec<Vec<f64>> {
    match *shape {
        [n] => vec![(0..n + pad).map(|i| coord(0, i)).collect()],
        [nx, ny] => {
            let count = (nx + pad) * (ny + pad);
            let mut xs = Vec::with_capacity(count);
            let mut ys = Vec::with_capacity(count);
            for i in 0..nx + pad {
                for j in 0..ny + pad {
                    xs.push(coord(0, i));
                    ys.push(coord(1, j));
                }
            }
            vec![xs, ys]
        }
        _ => unreachable!("construction rejects ndim outside 1..=2"),
    }
}

/// Flat boundary-index sets per side under the `i * ny + j` convention.
fn boundary_tables(shape: &[usize]) -> IndexMap<Side, Vec<usize>> {
    let mut tables = IndexMap::new();
    match *shape {
        [n] => {
            tables.insert(Side::West, vec![0]);
            tables.insert(Side::East, vec![n - 1]);
        }
        [nx, ny] => {
            let west: Vec<usize> = (0..ny).collect();
            let east: Vec<usize> = ((nx - 1) * ny..nx * ny).collect();
            let south: Vec<usize> = (0..nx).map(|i| i * ny).collect();
            let north: Vec<usize> = (0..nx).map(|i| i * ny + ny - 1).collect();
            tables.insert(Side::West, west);
            tables.insert(Side::East, east);
            tables.insert(Side::South, south);
            tables.insert(Side::North, north);
        }
        _ => unreachable!("construction rejects ndim outside 1..=2"),
    }
    tables
}

/// Pair each boundary cell with its one-cell-inward neighbour.
///
/// The inward stride is `ny` for west/east (one step in x) and `1` for
/// south/north (one step in y); `1` for both sides of a 1D grid. Sides
/// whose normal axis holds a single cell get no entry: stepping inward
/// from their boundary would leave the grid.
fn neumann_tables(
    shape: &[usize],
    boundary: &IndexMap<Side, Vec<usize>>,
) -> IndexMap<Side, (Vec<usize>, Vec<usize>)> {
    let stride = |side: Side| -> isize {
        let along = match *shape {
            [_] => 1isize,
            [_, ny] => {
                if side.axis() == 0 {
                    ny as isize
                } else {
                    1
                }
            }
            _ => unreachable!("construction rejects ndim outside 1..=2"),
        };
        if side.is_lower() {
            along
        } else {
            -along
        }
    };

    boundary
        .iter()
        .filter(|(&side, _)| shape[side.axis()] > 1)
        .map(|(&side, bd)| {
            let offset = stride(side);
            let inner: Vec<usize> = bd
                .iter()
                .map(|&k| (k as isize + offset) as usize)
                .collect();
            (side, (bd.clone(), inner))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn rejects_bad_configuration() {
        assert_eq!(
            UniformGrid::new(&[4, 4, 4], &[1.0, 1.0, 1.0]).unwrap_err(),
            GridError::UnsupportedDimension { ndim: 3 }
        );
        assert_eq!(
            UniformGrid::new(&[], &[]).unwrap_err(),
            GridError::UnsupportedDimension { ndim: 0 }
        );
        assert!(matches!(
            UniformGrid::new(&[4, 4], &[1.0]).unwrap_err(),
            GridError::LengthMismatch { what: "spacing", .. }
        ));
        assert_eq!(
            UniformGrid::new(&[4, 0], &[1.0, 1.0]).unwrap_err(),
            GridError::EmptyAxis { axis: 1 }
        );
        assert_eq!(
            UniformGrid::new(&[4], &[-0.5]).unwrap_err(),
            GridError::NonPositiveSpacing {
                axis: 0,
                value: -0.5
            }
        );
    }

    #[test]
    fn boundary_strip_lengths_2d() {
        let grid = UniformGrid::new(&[5, 3], &[1.0, 1.0]).unwrap();
        assert_eq!(grid.boundary_indices(Side::West).unwrap().len(), 3);
        assert_eq!(grid.boundary_indices(Side::East).unwrap().len(), 3);
        assert_eq!(grid.boundary_indices(Side::South).unwrap().len(), 5);
        assert_eq!(grid.boundary_indices(Side::North).unwrap().len(), 5);
    }

    #[test]
    fn sides_overlap_only_at_corners() {
        let grid = UniformGrid::new(&[5, 3], &[1.0, 1.0]).unwrap();
        let sets: Vec<HashSet<usize>> = Side::ALL_2D
            .iter()
            .map(|&s| grid.boundary_indices(s).unwrap().iter().copied().collect())
            .collect();
        let corners: HashSet<usize> = [0, 2, 12, 14].into_iter().collect();
        for a in 0..4 {
            for b in a + 1..4 {
                let overlap: HashSet<usize> = sets[a].intersection(&sets[b]).copied().collect();
                assert!(
                    overlap.is_subset(&corners),
                    "sides {a} and {b} overlap off-corner: {overlap:?}"
                );
            }
        }
    }

    #[test]
    fn one_dimensional_grid_has_two_sides() {
        let grid = UniformGrid::new(&[7], &[0.25]).unwrap();
        assert_eq!(grid.sides(), &Side::ALL_1D);
        assert_eq!(grid.boundary_indices(Side::West).unwrap(), &[0]);
        assert_eq!(grid.boundary_indices(Side::East).unwrap(), &[6]);
        assert_eq!(
            grid.boundary_indices(Side::North).unwrap_err(),
            GridError::UnknownSide {
                side: "north".into()
            }
        );
    }

    #[test]
    fn neumann_pairs_step_one_cell_inward() {
        let grid = UniformGrid::new(&[4, 3], &[1.0, 1.0]).unwrap();
        let (bd, inner) = grid.neumann_indices(Side::West).unwrap();
        assert_eq!(bd, &[0, 1, 2]);
        assert_eq!(inner, &[3, 4, 5]);

        let (bd, inner) = grid.neumann_indices(Side::North).unwrap();
        assert_eq!(bd, &[2, 5, 8, 11]);
        assert_eq!(inner, &[1, 4, 7, 10]);
    }

    #[test]
    fn single_cell_axes_have_no_neumann_pairs() {
        // One cell across x: west and east cannot step inward, the y sides
        // still pair normally.
        let grid = UniformGrid::new(&[1, 4], &[1.0, 1.0]).unwrap();
        for side in [Side::West, Side::East] {
            assert_eq!(
                grid.neumann_indices(side).unwrap_err(),
                GridError::NoInteriorNeighbor {
                    side: side.to_string()
                }
            );
        }
        let (bd, inner) = grid.neumann_indices(Side::South).unwrap();
        assert_eq!(bd, &[0]);
        assert_eq!(inner, &[1]);

        let line = UniformGrid::new(&[1], &[1.0]).unwrap();
        assert_eq!(
            line.neumann_indices(Side::East).unwrap_err(),
            GridError::NoInteriorNeighbor {
                side: "east".into()
            }
        );
        // The boundary tables themselves are still published.
        assert_eq!(line.boundary_indices(Side::East).unwrap(), &[0]);
    }

    #[test]
    fn cell_centers_are_offset_half_a_cell() {
        let grid = UniformGrid::with_origin(&[2, 2], &[1.0, 2.0], &[10.0, 0.0]).unwrap();
        // Flat order: (0,0), (0,1), (1,0), (1,1).
        assert_eq!(grid.centers(0), &[10.5, 10.5, 11.5, 11.5]);
        assert_eq!(grid.centers(1), &[1.0, 3.0, 1.0, 3.0]);
        // Face lattice is 3x3.
        assert_eq!(grid.faces(0).len(), 9);
        assert_eq!(grid.faces(0)[0], 10.0);
        assert_eq!(grid.faces(1)[8], 4.0);
    }

    #[test]
    fn sponge_defaults_to_boundary_strip() {
        let grid = UniformGrid::new(&[4, 4], &[1.0, 1.0]).unwrap();
        for &side in grid.sides() {
            assert_eq!(
                grid.sponge_indices(side).unwrap(),
                grid.boundary_indices(side).unwrap()
            );
        }
    }

    #[test]
    fn widened_sponge_strip_covers_inner_cells() {
        let grid = UniformGrid::new(&[5, 3], &[1.0, 1.0]).unwrap()
            .with_sponge_width(Side::East, 2)
            .unwrap();
        // i in {3, 4}, all j.
        assert_eq!(
            grid.sponge_indices(Side::East).unwrap(),
            &[9, 10, 11, 12, 13, 14]
        );
        // Boundary table is untouched.
        assert_eq!(grid.boundary_indices(Side::East).unwrap(), &[12, 13, 14]);
    }

    #[test]
    fn sponge_width_bounds_checked() {
        let grid = UniformGrid::new(&[5, 3], &[1.0, 1.0]).unwrap();
        assert_eq!(
            grid.clone().with_sponge_width(Side::West, 0).unwrap_err(),
            GridError::InvalidSpongeWidth {
                width: 0,
                extent: 5
            }
        );
        assert_eq!(
            grid.with_sponge_width(Side::South, 4).unwrap_err(),
            GridError::InvalidSpongeWidth {
                width: 4,
                extent: 3
            }
        );
    }

    proptest! {
        #[test]
        fn boundary_indices_are_valid_and_sized(nx in 1usize..24, ny in 1usize..24) {
            let grid = UniformGrid::new(&[nx, ny], &[1.0, 1.0]).unwrap();
            let n = grid.cell_count();
            prop_assert_eq!(grid.boundary_indices(Side::West).unwrap().len(), ny);
            prop_assert_eq!(grid.boundary_indices(Side::East).unwrap().len(), ny);
            prop_assert_eq!(grid.boundary_indices(Side::South).unwrap().len(), nx);
            prop_assert_eq!(grid.boundary_indices(Side::North).unwrap().len(), nx);
            for &side in grid.sides() {
                for &k in grid.boundary_indices(side).unwrap() {
                    prop_assert!(k < n, "side {side} index {k} out of range {n}");
                }
            }
        }

        #[test]
        fn neumann_interior_indices_stay_in_range(nx in 1usize..24, ny in 1usize..24) {
            let grid = UniformGrid::new(&[nx, ny], &[0.5, 0.5]).unwrap();
            let n = grid.cell_count();
            for &side in grid.sides() {
                // A single-cell normal axis has nothing to pair with.
                if grid.shape()[side.axis()] < 2 {
                    prop_assert_eq!(
                        grid.neumann_indices(side).unwrap_err(),
                        GridError::NoInteriorNeighbor {
                            side: side.to_string()
                        }
                    );
                    continue;
                }
                let (bd, inner) = grid.neumann_indices(side).unwrap();
                prop_assert_eq!(bd.len(), inner.len());
                for (&b, &i) in bd.iter().zip(inner) {
                    prop_assert!(i < n);
                    prop_assert_ne!(b, i);
                }
            }
        }

        #[test]
        fn center_coordinates_lie_inside_the_domain(
            nx in 1usize..16,
            ny in 1usize..16,
            dx in 0.1f64..2.0,
            dy in 0.1f64..2.0,
        ) {
            let grid = UniformGrid::new(&[nx, ny], &[dx, dy]).unwrap();
            for axis in 0..2 {
                let hi = grid.shape()[axis] as f64 * grid.spacing()[axis];
                for &c in grid.centers(axis) {
                    prop_assert!(c > 0.0 && c < hi);
                }
            }
        }
    }
}
