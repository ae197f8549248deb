//! The Jindosh Riddle: five ladies at a dinner party, six categories of five
//! values each, and sixteen clues that pin down a single seating arrangement.

use crate::solver::{
    clue::{Clue, ValueName},
    puzzle::Puzzle,
    registry::Category,
};

fn v(category: &str, value: &str) -> ValueName {
    ValueName::new(category, value)
}

pub fn categories() -> Vec<Category> {
    vec![
        Category::new(
            "name",
            [
                "Lady Winslow",
                "Doctor Marcolla",
                "Countess Contee",
                "Madam Natsiou",
                "Baroness Finch",
            ],
        ),
        Category::new(
            "heirloom",
            ["Diamond", "Ring", "Bird Pendant", "War Medal", "Snuff Tin"],
        ),
        Category::new("color", ["purple", "red", "green", "white", "blue"]),
        Category::new("drink", ["beer", "rum", "wine", "whiskey", "absinthe"]),
        Category::new(
            "city",
            ["Dunwall", "Dabokva", "Baleton", "Fraeport", "Karnaca"],
        ),
        Category::new(
            "seat",
            [
                "leftmost",
                "center-left",
                "center",
                "center-right",
                "rightmost",
            ],
        ),
    ]
}

pub fn clues() -> Vec<Clue> {
    vec![
        Clue::same_entity(v("name", "Madam Natsiou"), v("color", "purple")),
        Clue::same_entity(v("name", "Lady Winslow"), v("seat", "leftmost")),
        Clue::adjacent("seat", v("name", "Lady Winslow"), v("color", "red")),
        Clue::left_of("seat", v("color", "green"), v("color", "white")),
        Clue::same_entity(v("color", "green"), v("drink", "beer")),
        Clue::same_entity(v("city", "Dunwall"), v("color", "blue")),
        Clue::adjacent("seat", v("heirloom", "Ring"), v("city", "Dunwall")),
        Clue::same_entity(v("name", "Doctor Marcolla"), v("heirloom", "Diamond")),
        Clue::same_entity(v("city", "Dabokva"), v("heirloom", "War Medal")),
        Clue::adjacent("seat", v("heirloom", "Snuff Tin"), v("city", "Baleton")),
        Clue::adjacent("seat", v("city", "Baleton"), v("drink", "rum")),
        Clue::same_entity(v("heirloom", "Snuff Tin"), v("drink", "rum")),
        Clue::same_entity(v("name", "Countess Contee"), v("drink", "wine")),
        Clue::same_entity(v("city", "Fraeport"), v("drink", "whiskey")),
        Clue::same_entity(v("seat", "center"), v("drink", "absinthe")),
        Clue::same_entity(v("name", "Baroness Finch"), v("city", "Karnaca")),
    ]
}

pub fn puzzle() -> Puzzle {
    Puzzle {
        categories: categories(),
        clues: clues(),
    }
}
