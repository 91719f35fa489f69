use super::*;

/// Tests the metadata blob text is replaced wholesale.
///
/// Expected: new text stored, other columns untouched
#[tokio::test]
async fn replaces_blob_text() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pedido_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pedido = PedidoFactory::new(db)
        .archivos_json(r#"{"files":[]}"#)
        .build()
        .await?;

    let updated = PedidoRepository::new(db)
        .update_archivos_json(pedido.id, Some(r#"{"files":[],"adminPrecio":"Q50"}"#.to_string()))
        .await?
        .unwrap();

    assert_eq!(
        updated.archivos_json.as_deref(),
        Some(r#"{"files":[],"adminPrecio":"Q50"}"#)
    );
    assert_eq!(updated.nombre, pedido.nombre);

    Ok(())
}

/// Tests the blob can be cleared.
///
/// Expected: column null afterwards
#[tokio::test]
async fn clears_blob_with_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pedido_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pedido = PedidoFactory::new(db)
        .archivos_json(r#"{"files":[]}"#)
        .build()
        .await?;

    let updated = PedidoRepository::new(db)
        .update_archivos_json(pedido.id, None)
        .await?
        .unwrap();

    assert!(updated.archivos_json.is_none());

    Ok(())
}

/// Tests updating an unknown order id.
///
/// Expected: None
#[tokio::test]
async fn returns_none_for_unknown_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pedido_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = PedidoRepository::new(db)
        .update_archivos_json(404, Some("{}".to_string()))
        .await?;

    assert!(updated.is_none());

    Ok(())
}
