use crate::models::{Category, Product, ProductInput};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

/// SeaORM entity for the `products` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(250))")]
    pub description: String,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub price: Decimal,
    pub available: bool,
    pub category: Category,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            available: model.available,
            category: model.category,
        }
    }
}

impl ActiveModel {
    /// Insert model; the id comes from the SERIAL column.
    pub fn for_insert(input: ProductInput) -> Self {
        Self {
            id: NotSet,
            name: Set(input.name),
            description: Set(input.description),
            price: Set(input.price),
            available: Set(input.available),
            category: Set(input.category),
        }
    }

    /// Full-replacement update of the row with `id`.
    pub fn for_update(id: i32, input: ProductInput) -> Self {
        Self {
            id: Set(id),
            ..Self::for_insert(input)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_update_model_sets_every_column() {
        let input = ProductInput {
            name: "Wrench".to_string(),
            description: String::new(),
            price: dec!(9.99),
            available: false,
            category: Category::Tools,
        };

        let model = ActiveModel::for_update(4, input);
        assert_eq!(model.id, Set(4));
        assert_eq!(model.category, Set(Category::Tools));
        assert!(ActiveModel::for_insert(ProductInput {
            name: "x".into(),
            description: String::new(),
            price: dec!(1),
            available: true,
            category: Category::Unknown,
        })
        .id
        .is_not_set());
    }
}
