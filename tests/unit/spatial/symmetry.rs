//! Tests for window reflections, rotations and symmetry group selection

#[cfg(test)]
mod tests {
    use ndarray::{ArrayD, IxDyn};
    use wfc_overlap::io::error::CatalogError;
    use wfc_overlap::spatial::symmetry::{
        IdentityGroup, PlanarGroup, SymmetryGroup, flip_horizontal, flip_vertical, rotate_90,
        rotate_180, symmetry_for,
    };

    fn grid(shape: &[usize], cells: Vec<usize>) -> ArrayD<usize> {
        ArrayD::from_shape_vec(IxDyn(shape), cells).unwrap()
    }

    fn cells(array: &ArrayD<usize>) -> Vec<usize> {
        array.iter().copied().collect()
    }

    // Tests reflections reverse the expected axis
    #[test]
    fn test_flips() {
        let window = grid(&[2, 2], vec![0, 1, 2, 3]);
        assert_eq!(cells(&flip_horizontal(window.view())), vec![1, 0, 3, 2]);
        assert_eq!(cells(&flip_vertical(window.view())), vec![2, 3, 0, 1]);
    }

    // Tests quarter and half turns are counter-clockwise
    #[test]
    fn test_rotations() {
        let window = grid(&[2, 2], vec![0, 1, 2, 3]);
        assert_eq!(cells(&rotate_90(window.view())), vec![1, 3, 0, 2]);
        assert_eq!(cells(&rotate_180(window.view())), vec![3, 2, 1, 0]);
    }

    // Tests a quarter turn of a non-square window transposes its shape
    #[test]
    fn test_rotate_non_square() {
        let window = grid(&[2, 3], vec![0, 1, 2, 3, 4, 5]);
        let rotated = rotate_90(window.view());
        assert_eq!(rotated.shape(), [3, 2]);
        assert_eq!(cells(&rotated), vec![2, 5, 1, 4, 0, 3]);
    }

    // Tests four quarter turns restore the window and two equal a half turn
    #[test]
    fn test_rotation_composition() {
        let window = grid(&[3, 3], (0..9).collect());
        let mut turned = window.clone();
        for _ in 0..4 {
            turned = rotate_90(turned.view());
        }
        assert_eq!(turned, window);

        let twice = rotate_90(rotate_90(window.view()).view());
        assert_eq!(twice, rotate_180(window.view()));
    }

    // Tests the planar group emits five variants in the documented order
    #[test]
    fn test_planar_group_variants() {
        let window = grid(&[2, 2], vec![0, 1, 2, 3]);
        let variants = PlanarGroup.variants(window.view());

        assert_eq!(variants.len(), 5);
        assert_eq!(variants[0], window);
        assert_eq!(variants[1], flip_horizontal(window.view()));
        assert_eq!(variants[2], flip_vertical(window.view()));
        assert_eq!(variants[3], rotate_90(window.view()));
        assert_eq!(variants[4], rotate_180(window.view()));
    }

    // Tests the planar group drops the quarter turn for non-square windows
    #[test]
    fn test_planar_group_non_square() {
        let window = grid(&[1, 3], vec![0, 1, 2]);
        let variants = PlanarGroup.variants(window.view());

        assert_eq!(variants.len(), 4);
        assert!(variants.iter().all(|v| v.shape() == [1, 3]));
    }

    // Tests the identity group returns the window alone
    #[test]
    fn test_identity_group() {
        let window = grid(&[2, 2], vec![0, 1, 2, 3]);
        let variants = IdentityGroup.variants(window.view());
        assert_eq!(variants, vec![window]);
    }

    // Tests group selection by arity and flag
    #[test]
    fn test_symmetry_for() {
        let square = grid(&[2, 2], vec![0, 1, 2, 3]);
        let strip = grid(&[3], vec![0, 1, 2]);

        let planar = symmetry_for(2, true).unwrap();
        assert_eq!(planar.variants(square.view()).len(), 5);

        let disabled = symmetry_for(2, false).unwrap();
        assert_eq!(disabled.variants(square.view()).len(), 1);

        let linear = symmetry_for(1, true).unwrap();
        assert_eq!(linear.variants(strip.view()).len(), 1);

        assert!(symmetry_for(4, false).is_ok());
        assert!(matches!(
            symmetry_for(3, true),
            Err(CatalogError::UnsupportedSymmetry { dimensions: 3 })
        ));
    }
}
