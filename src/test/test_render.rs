
#[cfg(test)]
mod test {
    use crate::console_interface::parse_grid;
    use crate::core::GridError;
    use crate::test::test_util::GameTestState;

    #[test]
    fn fresh_mine_renders_plain_values(){
        let game = GameTestState::new(r#"
1 2 3
4 5 6
"#);
        game.assert_matches(r#"
 1  2  3
 4  5  6
"#);
    }

    #[test]
    fn selected_cells_are_bracketed(){
        let mut game = GameTestState::new(r#"
1 2 3
4 5 6
7 8 9
"#);
        game.apply_selects(&[(1, 0), (0, 1)]);
        game.assert_matches(r#"
 1 [2] 3
[4] 5  6
 7  8  9
"#);
    }

    #[test]
    fn optimal_path_is_revealed_when_lost(){
        let mut game = GameTestState::new(r#"
1 2 3
4 5 6
7 8 9
"#);
        game.apply_selects(&[(1, 0), (1, 1), (2, 2)]);
        game.assert_matches(r#"
 1  2  3
[4][5] 6
(7)(8)[9]
"#);
    }

    #[test]
    fn parse_skips_blank_lines_and_extra_spaces(){
        let grid = parse_grid("\n  1   2\n\n3 4  \n").unwrap();
        assert_eq!(grid.to_rows(), vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn parse_reports_bad_token(){
        let err = parse_grid("1 2\n3 x\n").unwrap_err();
        assert_eq!(err, GridError::Parse { line: 2, token: "x".to_string() });
        assert_eq!(err.to_string(), "Invalid cell value \"x\" on line 2");
    }

    #[test]
    fn parse_rejects_ragged_and_empty_text(){
        assert_eq!(parse_grid("  \n\n"), Err(GridError::Empty));
        assert!(matches!(parse_grid("1 2\n3\n"), Err(GridError::Ragged { row: 1, expected: 2, found: 1 })));
    }
}
