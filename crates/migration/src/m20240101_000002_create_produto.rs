//! Create `produtos` table.
//!
//! `category_id` is indexed but carries no database foreign key: the
//! reference is checked when a product is written, and deleting a category
//! leaves its products in place.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Produtos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Produtos::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Produtos::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Produtos::Price).double().not_null())
                    .col(ColumnDef::new(Produtos::CategoryId).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_produtos_category_id")
                    .table(Produtos::Table)
                    .col(Produtos::CategoryId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Produtos::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Produtos { Table, Id, Name, Price, CategoryId }
