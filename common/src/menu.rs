use serde::{Deserialize, Serialize};

/// A dish offered on the customer menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Price per unit in céntimos.
    pub price: u64,
}

/// The house menu. Static client-side data; the products service owns the
/// real catalog.
pub fn menu_items() -> Vec<MenuItem> {
    [
        (1, "Maki Acevichado", "Delicioso maki con pescado fresco", 1800),
        (2, "Ramen Tradicional", "Ramen casero con caldo de huesos", 2200),
        (3, "Gyoza", "Empanadillas japonesas fritas", 1200),
        (4, "Tempura Mix", "Vegetales y camarones empanizados", 2400),
        (5, "Nigiri Salmón", "5 piezas de nigiri de salmón", 2000),
        (6, "California Roll", "8 piezas de california roll", 1600),
    ]
    .into_iter()
    .map(|(id, name, description, price)| MenuItem {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_has_distinct_ids() {
        let items = menu_items();
        let mut ids: Vec<u32> = items.iter().map(|i| i.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), items.len());
    }
}
