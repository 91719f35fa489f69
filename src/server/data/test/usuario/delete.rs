use super::*;

use test_utils::factory::pedido::PedidoFactory;

use crate::server::data::pedido::PedidoRepository;

/// Tests deletion of an existing account.
///
/// Expected: true, account gone afterwards
#[tokio::test]
async fn deletes_existing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Usuario)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let usuario = UsuarioFactory::new(db).build().await?;

    let repository = UsuarioRepository::new(db);
    let deleted = repository.delete(usuario.id).await?;

    assert!(deleted);
    assert!(repository.find_by_id(usuario.id).await?.is_none());

    Ok(())
}

/// Tests deletion of an unknown account id.
///
/// Expected: false
#[tokio::test]
async fn returns_false_for_unknown_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Usuario)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repository = UsuarioRepository::new(db);

    assert!(!repository.delete(99).await?);

    Ok(())
}

/// Tests the account's orders survive deletion with their owner cleared.
///
/// Expected: order still present with usuario_id = None
#[tokio::test]
async fn clears_ownership_of_surviving_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pedido_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = UsuarioFactory::new(db).build().await?;
    let pedido = PedidoFactory::new(db).usuario_id(owner.id).build().await?;

    UsuarioRepository::new(db).delete(owner.id).await?;

    let survivor = PedidoRepository::new(db).find_by_id(pedido.id).await?;

    assert_eq!(survivor.map(|p| p.usuario_id), Some(None));

    Ok(())
}
