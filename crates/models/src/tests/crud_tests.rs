use crate::db::connect;
use crate::{categoria, produto};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set};
use anyhow::Result;
use migration::MigratorTrait;

/// Connect and migrate, or `None` when no database is available.
async fn setup_test_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let db = match connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("skip: migrate up failed: {}", e);
        return None;
    }
    Some(db)
}

#[tokio::test]
async fn test_categoria_crud() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let created = categoria::ActiveModel {
        id: NotSet,
        name: Set("Analgesics".into()),
        description: Set(Some("pain relief".into())),
    }
    .insert(&db)
    .await?;
    assert!(created.id > 0);

    let found = categoria::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.as_ref(), Some(&created));

    let mut am: categoria::ActiveModel = created.clone().into();
    am.description = Set(None);
    let updated = am.update(&db).await?;
    assert_eq!(updated.description, None);
    assert_eq!(updated.id, created.id);

    categoria::Entity::delete_by_id(created.id).exec(&db).await?;
    assert!(categoria::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_produto_survives_category_delete() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let cat = categoria::ActiveModel { id: NotSet, name: Set("Vitamins".into()), description: Set(None) }
        .insert(&db)
        .await?;
    let prod = produto::ActiveModel {
        id: NotSet,
        name: Set("Vitamin C".into()),
        price: Set(12.5),
        category_id: Set(cat.id),
    }
    .insert(&db)
    .await?;

    // No database-level foreign key: the category row can go while products still point at it
    categoria::Entity::delete_by_id(cat.id).exec(&db).await?;
    let dangling = produto::Entity::find()
        .filter(produto::Column::CategoryId.eq(cat.id))
        .all(&db)
        .await?;
    assert_eq!(dangling.len(), 1);
    assert_eq!(dangling[0].id, prod.id);

    produto::Entity::delete_by_id(prod.id).exec(&db).await?;
    Ok(())
}
