//! Unit definitions - the static catalog and its registry

use std::collections::HashMap;
use std::sync::LazyLock;
use crate::{Unit, Category};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Every known unit, in presentation order. The first two units of each
/// category form its default from/to pair.
static CATALOG: [Unit; 16] = [
    // Distance (base: meter)
    Unit::new("m", "meter", Category::Distance, 1.0),
    Unit::new("km", "kilometer", Category::Distance, 1000.0),
    Unit::new("cm", "centimeter", Category::Distance, 0.01),
    Unit::new("mm", "millimeter", Category::Distance, 0.001),
    Unit::new("mi", "mile", Category::Distance, 1609.344),
    Unit::new("yd", "yard", Category::Distance, 0.9144),
    Unit::new("ft", "foot", Category::Distance, 0.3048),
    Unit::new("in", "inch", Category::Distance, 0.0254),
    Unit::new("nmi", "nautical mile", Category::Distance, 1852.0),

    // Mass (base: kilogram)
    Unit::new("kg", "kilogram", Category::Mass, 1.0),
    Unit::new("g", "gram", Category::Mass, 0.001),
    Unit::new("mg", "milligram", Category::Mass, 0.000001),
    Unit::new("t", "tonne", Category::Mass, 1000.0),
    Unit::new("lb", "pound", Category::Mass, 0.45359237),
    Unit::new("oz", "ounce", Category::Mass, 0.028349523125),
    Unit::new("st", "stone", Category::Mass, 6.35029318),
];

/// Registry of all known units
///
/// A single ordered catalog with a per-category index computed once at
/// startup, plus symbol and alias lookup tables.
pub struct UnitRegistry {
    units: &'static [Unit],
    by_category: HashMap<Category, Vec<usize>>,
    symbols: HashMap<&'static str, usize>,
    aliases: HashMap<&'static str, &'static str>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        Self::from_catalog(&CATALOG)
    }

    fn from_catalog(units: &'static [Unit]) -> Self {
        let mut registry = UnitRegistry {
            units,
            by_category: HashMap::new(),
            symbols: HashMap::new(),
            aliases: HashMap::new(),
        };

        for (index, unit) in units.iter().enumerate() {
            registry.by_category.entry(unit.category).or_default().push(index);
            registry.symbols.insert(unit.symbol, index);
        }
        registry.register_aliases();
        registry
    }

    /// Get a unit by symbol or alias
    pub fn get(&self, symbol: &str) -> Option<&'static Unit> {
        let units = self.units;
        // Try direct lookup first
        if let Some(&index) = self.symbols.get(symbol) {
            return Some(&units[index]);
        }
        // Try alias lookup
        let canonical = self.aliases.get(symbol)?;
        self.symbols.get(canonical).map(|&index| &units[index])
    }

    /// Units of a category, in catalog order
    pub fn list_units(&self, category: Category) -> Vec<&'static Unit> {
        self.iter_category(category).collect()
    }

    /// Restartable iterator over a category's units, in catalog order
    pub fn iter_category(&self, category: Category) -> impl Iterator<Item = &'static Unit> + Clone + '_ {
        let units = self.units;
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(move |&index| &units[index])
    }

    /// Check whether a unit is a catalog member of the given category
    pub fn is_member(&self, unit: &Unit, category: Category) -> bool {
        unit.category == category && self.iter_category(category).any(|u| u == unit)
    }

    /// First unit of a category, in catalog order
    pub fn first(&self, category: Category) -> Option<&'static Unit> {
        self.iter_category(category).next()
    }

    /// Categories that have at least one unit, in presentation order
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.by_category.contains_key(c))
            .collect()
    }

    /// Every unit in catalog order
    pub fn all(&self) -> &'static [Unit] {
        self.units
    }

    /// Get all unit symbols
    pub fn symbols(&self) -> Vec<&'static str> {
        self.units.iter().map(|u| u.symbol).collect()
    }

    fn alias(&mut self, alias: &'static str, symbol: &'static str) {
        self.aliases.insert(alias, symbol);
    }

    fn register_aliases(&mut self) {
        // Distance
        self.alias("meter", "m");
        self.alias("meters", "m");
        self.alias("metre", "m");
        self.alias("metres", "m");
        self.alias("kilometer", "km");
        self.alias("kilometers", "km");
        self.alias("kilometre", "km");
        self.alias("kilometres", "km");
        self.alias("centimeter", "cm");
        self.alias("centimeters", "cm");
        self.alias("millimeter", "mm");
        self.alias("millimeters", "mm");
        self.alias("mile", "mi");
        self.alias("miles", "mi");
        self.alias("yard", "yd");
        self.alias("yards", "yd");
        self.alias("foot", "ft");
        self.alias("feet", "ft");
        self.alias("inch", "in");
        self.alias("inches", "in");
        self.alias("nautical mile", "nmi");
        self.alias("nautical miles", "nmi");

        // Mass
        self.alias("kilogram", "kg");
        self.alias("kilograms", "kg");
        self.alias("gram", "g");
        self.alias("grams", "g");
        self.alias("milligram", "mg");
        self.alias("milligrams", "mg");
        self.alias("tonne", "t");
        self.alias("tonnes", "t");
        self.alias("pound", "lb");
        self.alias("pounds", "lb");
        self.alias("lbs", "lb");
        self.alias("ounce", "oz");
        self.alias("ounces", "oz");
        self.alias("stone", "st");
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_factor_positive() {
        for unit in UNITS.all() {
            assert!(unit.factor_to_base > 0.0, "{} has a non-positive factor", unit.symbol);
        }
    }

    #[test]
    fn test_every_category_has_two_units() {
        for category in Category::ALL {
            assert!(UNITS.list_units(category).len() >= 2, "{} needs two units", category);
        }
    }

    #[test]
    fn test_base_unit_leads_each_category() {
        for category in Category::ALL {
            let first = UNITS.first(category).unwrap();
            assert_eq!(first.symbol, category.base_unit());
            assert!(first.is_base());
        }
    }

    #[test]
    fn test_list_preserves_catalog_order() {
        let symbols: Vec<&str> = UNITS.list_units(Category::Mass)
            .iter()
            .map(|u| u.symbol)
            .collect();
        assert_eq!(symbols, ["kg", "g", "mg", "t", "lb", "oz", "st"]);
    }

    #[test]
    fn test_iterator_is_restartable() {
        let iter = UNITS.iter_category(Category::Distance);
        let first_pass: Vec<_> = iter.clone().collect();
        let second_pass: Vec<_> = iter.collect();
        assert_eq!(first_pass, second_pass);
        assert_eq!(first_pass.len(), 9);
    }

    #[test]
    fn test_is_member() {
        let km = UNITS.get("km").unwrap();
        assert!(UNITS.is_member(km, Category::Distance));
        assert!(!UNITS.is_member(km, Category::Mass));

        // Right category but not in the catalog
        let furlong = Unit::new("fur", "furlong", Category::Distance, 201.168);
        assert!(!UNITS.is_member(&furlong, Category::Distance));
    }

    #[test]
    fn test_alias_lookup() {
        assert_eq!(UNITS.get("feet").unwrap().symbol, "ft");
        assert_eq!(UNITS.get("kilograms").unwrap().symbol, "kg");
        assert!(UNITS.get("furlong").is_none());
    }

    #[test]
    fn test_symbols_are_unique() {
        let symbols = UNITS.symbols();
        let unique: std::collections::HashSet<_> = symbols.iter().collect();
        assert_eq!(symbols.len(), unique.len());
    }

    #[test]
    fn test_categories() {
        assert_eq!(UNITS.categories(), vec![Category::Distance, Category::Mass]);
    }
}
