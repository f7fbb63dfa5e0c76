//! Tests for offset construction and neighborhood enumeration

#[cfg(test)]
mod tests {
    use wfc_overlap::spatial::offset::Offset;

    // Tests the zero offset of each arity
    #[test]
    fn test_zero() {
        let zero = Offset::zero(3);
        assert_eq!(zero.components(), &[0, 0, 0]);
        assert_eq!(zero, Offset::from([0, 0, 0]));
        assert_ne!(Offset::zero(2), Offset::from([0, 1]));
    }

    // Tests face offsets are ordered by axis, negative first
    #[test]
    fn test_faces() {
        let faces = Offset::faces(2);
        assert_eq!(
            faces,
            vec![
                Offset::from([-1, 0]),
                Offset::from([1, 0]),
                Offset::from([0, -1]),
                Offset::from([0, 1]),
            ]
        );
        assert_eq!(Offset::faces(3).len(), 6);
    }

    // Tests the radius-1 planar neighborhood is the 8 unit offsets plus origin
    #[test]
    fn test_planar_neighborhood() {
        let offsets = Offset::neighborhood(2, 1);
        assert_eq!(offsets.len(), 9);
        assert_eq!(offsets.first(), Some(&Offset::from([-1, -1])));
        assert_eq!(offsets.get(1), Some(&Offset::from([-1, 0])));
        assert_eq!(offsets.last(), Some(&Offset::from([1, 1])));
        assert!(offsets.contains(&Offset::zero(2)));
    }

    // Tests neighborhood sizes for other arities and radii
    #[test]
    fn test_neighborhood_sizes() {
        assert_eq!(Offset::neighborhood(3, 1).len(), 27);
        assert_eq!(Offset::neighborhood(2, 2).len(), 25);
        assert_eq!(
            Offset::neighborhood(1, 2),
            vec![
                Offset::from([-2]),
                Offset::from([-1]),
                Offset::from([0]),
                Offset::from([1]),
                Offset::from([2]),
            ]
        );
        assert_eq!(Offset::neighborhood(2, 0), vec![Offset::zero(2)]);
    }

    // Tests the opposite offset negates every component
    #[test]
    fn test_opposite() {
        let offset = Offset::from([2, -1, 0]);
        assert_eq!(offset.opposite(), Offset::from([-2, 1, 0]));
        assert_eq!(offset.opposite().opposite(), offset);
    }

    // Tests conversions and display formatting
    #[test]
    fn test_conversions_and_display() {
        let from_vec = Offset::from(vec![1, -2]);
        let from_slice = Offset::from(&[1isize, -2][..]);
        assert_eq!(from_vec, from_slice);
        assert_eq!(from_vec, Offset::new(vec![1, -2]));
        assert_eq!(from_vec.arity(), 2);
        assert_eq!(from_vec.to_string(), "(1, -2)");
    }
}
