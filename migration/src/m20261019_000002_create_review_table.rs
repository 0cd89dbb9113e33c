use sea_orm_migration::prelude::*;

/// Creates the `review` table.
///
/// `game_id` is indexed but carries no foreign key: reviews are removed
/// alongside their game by the application when the game is deleted.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Review {
    Table,
    Id,
    GameId,
    Rating,
    ReviewText,
    CreatedDate,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Review::Id)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Review::GameId).string_len(64).not_null())
                    .col(
                        ColumnDef::new(Review::Rating)
                            .integer()
                            .not_null()
                            .check(Expr::col(Review::Rating).between(1, 5)),
                    )
                    .col(
                        ColumnDef::new(Review::ReviewText)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Review::CreatedDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_review_game_id")
                    .table(Review::Table)
                    .col(Review::GameId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await
    }
}
