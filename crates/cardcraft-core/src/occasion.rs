// SPDX-FileCopyrightText: 2026 Cardcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Occasions offered by the card form.

/// Occasions in the order the form lists them.
pub const OCCASIONS: [&str; 11] = [
    "Birthday",
    "Wedding",
    "Anniversary",
    "Graduation",
    "New Baby",
    "Get Well",
    "Thank You",
    "Holiday",
    "Sympathy",
    "Congratulations",
    "Other",
];

/// Returns true if `occasion` is one of [`OCCASIONS`] (exact, case-sensitive).
pub fn is_known_occasion(occasion: &str) -> bool {
    OCCASIONS.contains(&occasion)
}
