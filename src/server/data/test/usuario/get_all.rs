use super::*;

use chrono::{Duration, Utc};

/// Tests accounts come back newest first.
///
/// Expected: descending creation order
#[tokio::test]
async fn returns_accounts_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Usuario)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let older = UsuarioFactory::new(db)
        .creado_en(Utc::now() - Duration::hours(2))
        .build()
        .await?;
    let newer = UsuarioFactory::new(db).creado_en(Utc::now()).build().await?;

    let repository = UsuarioRepository::new(db);
    let usuarios = repository.get_all().await?;

    assert_eq!(usuarios.len(), 2);
    assert_eq!(usuarios[0].id, newer.id);
    assert_eq!(usuarios[1].id, older.id);

    Ok(())
}

/// Tests an empty table yields an empty list.
///
/// Expected: empty vec
#[tokio::test]
async fn returns_empty_list_without_accounts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Usuario)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repository = UsuarioRepository::new(db);
    let usuarios = repository.get_all().await?;

    assert!(usuarios.is_empty());

    Ok(())
}
