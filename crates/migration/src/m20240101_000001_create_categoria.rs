//! Create `categorias` table.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Categorias::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Categorias::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Categorias::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Categorias::Description).text().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Categorias::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Categorias { Table, Id, Name, Description }
