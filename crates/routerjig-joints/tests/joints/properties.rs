use proptest::prelude::*;
use routerjig_joints::{
    adjoining_cuts, validate_cut_sequence, Board, Cut, EqualSpacing, RouterBit, SpacingConfig,
    SpacingStrategy,
};

fn router_bit() -> impl Strategy<Value = RouterBit> {
    (2..=12i32, 8..=40i32, prop_oneof![Just(0.0f64), 1.0f64..15.0])
        .prop_map(|(half, depth, angle)| RouterBit::new(2 * half, depth, angle).unwrap())
        .prop_filter("bit needs a neck", |bit| bit.neck() > 0)
}

/// Cuts no narrower than the bit, separated by gaps no narrower than its neck
fn layout() -> impl Strategy<Value = (RouterBit, Board, Vec<Cut>)> {
    router_bit().prop_flat_map(|bit| {
        let bw = bit.width();
        (
            Just(bit),
            0..bw,
            prop::collection::vec((0..40i32, 0..40i32), 1..8),
            0..bw,
        )
            .prop_map(move |(bit, start, pieces, tail)| {
                let neck = bit.neck();
                let mut cuts = Vec::with_capacity(pieces.len());
                let mut x = start;
                for (i, (gap, extra)) in pieces.into_iter().enumerate() {
                    if i > 0 {
                        x += neck + gap;
                    }
                    cuts.push(Cut::new(x, x + bw + extra));
                    x += bw + extra;
                }
                let board = Board::with_width(x + tail).unwrap();
                (bit, board, cuts)
            })
    })
}

proptest! {
    #[test]
    fn passes_cover_cut_within_board(
        bit in router_bit(),
        board_width in 40..400i32,
        left in 0..400i32,
        width in 0..400i32,
        snap in 0..3u8,
    ) {
        let bw = bit.width();
        let (left, right) = match snap {
            0 => (0, width.clamp(bw, board_width)),
            1 => (board_width - width.clamp(bw, board_width), board_width),
            _ => {
                let left = left % (board_width - bw + 1);
                (left, (left + width.max(bw)).min(board_width))
            }
        };

        let board = Board::with_width(board_width).unwrap();
        let cut = Cut::new(left, right).with_router_passes(&bit, &board).unwrap();
        let passes = cut.passes();
        let half = bit.halfwidth();

        prop_assert!(passes.first().is_some_and(|p| p - half <= left));
        prop_assert!(passes.last().is_some_and(|p| p + half >= right));
        for pair in passes.windows(2) {
            prop_assert!(pair[1] - pair[0] <= bw);
        }
        for p in passes {
            prop_assert!(p - half >= left && p + half <= right);
        }
    }

    #[test]
    fn adjoining_of_valid_layout_is_valid((bit, board, cuts) in layout()) {
        prop_assert!(validate_cut_sequence(&cuts, &bit, &board).is_ok());
        let b_cuts = adjoining_cuts(&cuts, &bit, &board).unwrap();
        // a single cut across the whole edge leaves nothing for the mate
        prop_assume!(!b_cuts.is_empty());
        prop_assert!(validate_cut_sequence(&b_cuts, &bit, &board).is_ok());
        // validating again changes nothing
        prop_assert_eq!(
            validate_cut_sequence(&b_cuts, &bit, &board),
            validate_cut_sequence(&b_cuts, &bit, &board)
        );
    }

    #[test]
    fn centered_equal_spacing_is_symmetric(
        half in 2..=12i32,
        angle in prop_oneof![Just(0.0f64), 1.0f64..12.0],
        half_board in 48..200i32,
        extra_width in 0..20i32,
        extra_spacing in 0..20i32,
    ) {
        let bit = RouterBit::new(2 * half, 24, angle).unwrap();
        prop_assume!(bit.neck() > 0);
        let board = Board::with_width(2 * half_board).unwrap();
        let config = SpacingConfig::default();
        let width = bit.width() + 2 * extra_width;
        let spacing = bit.neck() + extra_spacing;
        let equal = EqualSpacing::with_values(&bit, &board, &config, spacing, width, true);
        prop_assume!(equal.is_ok());
        let equal = equal.unwrap();

        let w = board.width();
        let cuts = equal.cuts();
        for (a, b) in cuts.iter().zip(cuts.iter().rev()) {
            prop_assert_eq!(a.left, w - b.right);
        }
        let b_cuts = adjoining_cuts(cuts, &bit, &board).unwrap();
        for (a, b) in b_cuts.iter().zip(b_cuts.iter().rev()) {
            prop_assert_eq!(a.left, w - b.right);
        }
    }
}
