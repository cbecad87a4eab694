#[cfg(test)]
mod tests {
    use recipe_text::ingredient_parser::{parse_ingredient_line, parse_ingredient_list};

    #[test]
    fn test_full_recipe_input() {
        let text = "Dry:\n2 cups flour\n1 tsp baking soda\n\nFor the wet team:\n2 eggs\n1/2 cup milk (warm) optional\na dash of vanilla";
        let ingredients = parse_ingredient_list(text);

        assert_eq!(ingredients.len(), 5);

        assert_eq!(ingredients[0].amount, Some("2".to_string()));
        assert_eq!(ingredients[0].unit, Some("cup".to_string()));
        assert_eq!(ingredients[0].name, "flour");
        assert_eq!(ingredients[0].group_name, Some("Dry".to_string()));

        assert_eq!(ingredients[1].name, "baking soda");

        assert_eq!(ingredients[2].name, "eggs");
        assert_eq!(ingredients[2].unit, None);
        assert_eq!(ingredients[2].group_name, Some("wet team".to_string()));

        assert_eq!(ingredients[3].name, "milk");
        assert_eq!(ingredients[3].notes, Some("warm".to_string()));
        assert!(ingredients[3].is_optional);

        // No numeric first token: the whole line is the name
        assert_eq!(ingredients[4].name, "a dash of vanilla");
        assert_eq!(ingredients[4].amount, None);
    }

    #[test]
    fn test_display_order_spans_groups() {
        let text = "1 cup sugar\nFor the topping:\n2 tbsp butter\n1 pinch salt";
        let ingredients = parse_ingredient_list(text);
        let orders: Vec<usize> = ingredients.iter().map(|i| i.display_order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn test_optional_with_notes() {
        let result = parse_ingredient_line("1/2 cup sugar (or brown sugar) optional", None, 0);
        assert_eq!(result.amount, Some("1/2".to_string()));
        assert_eq!(result.unit, Some("cup".to_string()));
        assert_eq!(result.name, "sugar");
        assert_eq!(result.notes, Some("or brown sugar".to_string()));
        assert!(result.is_optional);
    }

    #[test]
    fn test_fallback_keeps_full_line() {
        let result = parse_ingredient_line("a pinch of love", None, 0);
        assert_eq!(result.amount, None);
        assert_eq!(result.unit, None);
        assert_eq!(result.name, "a pinch of love");
    }

    #[test]
    fn test_unit_spellings_canonicalized() {
        let cases = [
            ("1 tablespoon honey", "tbsp"),
            ("2 cups flour", "cup"),
            ("3 Tsp sugar", "tsp"),
            ("500 grams beef", "g"),
            ("2 lbs potatoes", "lb"),
        ];
        for (line, expected_unit) in cases {
            let result = parse_ingredient_line(line, None, 0);
            assert_eq!(
                result.unit.as_deref(),
                Some(expected_unit),
                "line: {:?}",
                line
            );
        }
    }

    #[test]
    fn test_unknown_unit_swallowed_into_name() {
        let result = parse_ingredient_line("2 smidgens nutmeg", None, 0);
        assert_eq!(result.unit, None);
        assert_eq!(result.name, "smidgens nutmeg");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_ingredient_list("").is_empty());
        assert!(parse_ingredient_list("\n\n   \n").is_empty());
    }

    #[test]
    fn test_every_content_line_produces_a_record() {
        let text = "???\n!!!\n2 cups flour";
        let ingredients = parse_ingredient_list(text);
        assert_eq!(ingredients.len(), 3);
        assert_eq!(ingredients[0].name, "???");
        assert_eq!(ingredients[1].name, "!!!");
    }
}
