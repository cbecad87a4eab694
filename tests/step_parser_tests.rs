#[cfg(test)]
mod tests {
    use recipe_text::step_parser::parse_step_list;

    #[test]
    fn test_renumbering_on_group_header() {
        let steps = parse_step_list("Step A\nFor the topping:\nStep B\nStep C");
        let numbers: Vec<usize> = steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![1, 1, 2]);

        let groups: Vec<Option<&str>> = steps.iter().map(|s| s.group_name.as_deref()).collect();
        assert_eq!(groups, vec![None, Some("topping"), Some("topping")]);
    }

    #[test]
    fn test_ordinals_and_bullets() {
        let steps = parse_step_list("1. Preheat oven to 350F\n2) Butter the pan\n- Mix dry ingredients\n• Combine everything");
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0].instruction, "Preheat oven to 350F");
        assert_eq!(steps[1].instruction, "Butter the pan");
        assert_eq!(steps[2].instruction, "Mix dry ingredients");
        assert_eq!(steps[3].instruction, "Combine everything");
        let numbers: Vec<usize> = steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_instructions_dropped() {
        let steps = parse_step_list("1.\n-\nKnead the dough");
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].instruction, "Knead the dough");
        assert_eq!(steps[0].step_number, 1);
    }

    #[test]
    fn test_optional_step() {
        let steps = parse_step_list("Top with cilantro garnish");
        assert_eq!(steps[0].instruction, "Top with cilantro");
        assert!(steps[0].is_optional);
    }

    #[test]
    fn test_blank_lines_do_not_reset_group_or_numbering() {
        let steps = parse_step_list("For the filling:\nChop apples\n\n\nAdd cinnamon");
        let numbers: Vec<usize> = steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert!(steps
            .iter()
            .all(|s| s.group_name.as_deref() == Some("filling")));
    }

    #[test]
    fn test_header_never_becomes_a_step() {
        let steps = parse_step_list("For the sauce:\nSimmer for 10 minutes");
        assert_eq!(steps.len(), 1);
        assert!(!steps[0].instruction.contains("sauce"));
    }
}
