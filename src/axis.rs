use strum::EnumIter;

/// Coordinate axis. 2D vectors only use [`Axis::X`] and [`Axis::Y`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
#[repr(u8)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn iteration_order_matches_discriminants() {
        let axes: Vec<Axis> = Axis::iter().collect();
        assert_eq!(axes, vec![Axis::X, Axis::Y, Axis::Z]);
        assert_eq!(Axis::Z as u8, 2);
    }
}
