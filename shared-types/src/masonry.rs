//! Greedy column balancing for the gallery grid.

pub trait HasHeight {
    fn height(&self) -> u32;
}

impl HasHeight for u32 {
    fn height(&self) -> u32 {
        *self
    }
}

/// Indices of `heights` split into `columns` columns. Each item goes to the
/// currently shortest column (lowest index on ties), keeping input order
/// within a column. Zero columns is treated as one.
pub fn assign_columns(heights: &[u32], columns: usize) -> Vec<Vec<usize>> {
    let columns = columns.max(1);
    let mut assigned = vec![Vec::new(); columns];
    let mut totals = vec![0u64; columns];

    for (index, height) in heights.iter().enumerate() {
        let mut shortest = 0;
        for (column, total) in totals.iter().enumerate() {
            if *total < totals[shortest] {
                shortest = column;
            }
        }
        assigned[shortest].push(index);
        totals[shortest] += u64::from(*height);
    }

    assigned
}

/// Splits `items` into masonry columns.
pub fn masonry_columns<T: HasHeight + Clone>(items: &[T], columns: usize) -> Vec<Vec<T>> {
    let heights: Vec<u32> = items.iter().map(HasHeight::height).collect();
    assign_columns(&heights, columns)
        .into_iter()
        .map(|column| column.into_iter().map(|i| items[i].clone()).collect())
        .collect()
}

pub fn column_heights<T: HasHeight>(columns: &[Vec<T>]) -> Vec<u64> {
    columns
        .iter()
        .map(|column| column.iter().map(|item| u64::from(item.height())).sum())
        .collect()
}

/// Column count for a viewport width in CSS pixels.
pub fn column_count_for_width(width: u32) -> usize {
    if width >= 1024 {
        3
    } else if width >= 640 {
        2
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GALLERY;

    const HEIGHTS: [u32; 8] = [400, 600, 500, 350, 700, 300, 650, 550];

    #[test]
    fn each_item_lands_in_the_shortest_column() {
        let columns = assign_columns(&HEIGHTS, 3);
        assert_eq!(columns, vec![vec![0, 3, 6], vec![1, 5, 7], vec![2, 4]]);

        let mut totals = [0u32; 3];
        let mut placement = vec![0usize; HEIGHTS.len()];
        for (c, column) in columns.iter().enumerate() {
            for &i in column {
                placement[i] = c;
            }
        }
        for (i, h) in HEIGHTS.iter().enumerate() {
            let min = *totals.iter().min().unwrap();
            assert_eq!(totals[placement[i]], min, "item {i} skipped a shorter column");
            totals[placement[i]] += h;
        }
    }

    #[test]
    fn no_column_starves() {
        let columns = masonry_columns(&HEIGHTS, 3);
        let heights = column_heights(&columns);
        assert_eq!(heights, vec![1400, 1450, 1200]);
        let spread = heights.iter().max().unwrap() - heights.iter().min().unwrap();
        let tallest = u64::from(*HEIGHTS.iter().max().unwrap());
        assert!(spread < tallest);
    }

    #[test]
    fn same_input_same_layout() {
        assert_eq!(assign_columns(&HEIGHTS, 3), assign_columns(&HEIGHTS, 3));
    }

    #[test]
    fn degenerate_column_counts() {
        assert_eq!(assign_columns(&HEIGHTS, 0), vec![(0..8).collect::<Vec<_>>()]);
        assert_eq!(assign_columns(&[], 2), vec![Vec::<usize>::new(), Vec::new()]);
        let wide = assign_columns(&[10, 20], 4);
        assert_eq!(wide, vec![vec![0], vec![1], vec![], vec![]]);
    }

    #[test]
    fn gallery_catalog_uses_the_same_balancing() {
        let columns = masonry_columns(GALLERY, 3);
        let ids: Vec<Vec<u32>> = columns
            .iter()
            .map(|c| c.iter().map(|p| p.id).collect())
            .collect();
        assert_eq!(ids, vec![vec![1, 4, 7], vec![2, 6, 8], vec![3, 5]]);
    }

    #[test]
    fn breakpoints() {
        assert_eq!(column_count_for_width(320), 1);
        assert_eq!(column_count_for_width(640), 2);
        assert_eq!(column_count_for_width(1023), 2);
        assert_eq!(column_count_for_width(1440), 3);
    }
}
