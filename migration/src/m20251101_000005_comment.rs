use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_user::User, m20251101_000002_character::Character,
    m20251101_000003_planet::Planet,
};

static IDX_COMMENT_USER_ID: &str = "idx-comment-user_id";
static FK_COMMENT_USER_ID: &str = "fk-comment-user_id";
static FK_COMMENT_CHARACTER_ID: &str = "fk-comment-character_id";
static FK_COMMENT_PLANET_ID: &str = "fk-comment-planet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(pk_auto(Comment::Id))
                    .col(text(Comment::Content))
                    .col(integer(Comment::UserId))
                    .col(integer_null(Comment::CharacterId))
                    .col(integer_null(Comment::PlanetId))
                    .col(date_time(Comment::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COMMENT_USER_ID)
                            .from(Comment::Table, Comment::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COMMENT_CHARACTER_ID)
                            .from(Comment::Table, Comment::CharacterId)
                            .to(Character::Table, Character::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COMMENT_PLANET_ID)
                            .from(Comment::Table, Comment::PlanetId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COMMENT_USER_ID)
                    .table(Comment::Table)
                    .col(Comment::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COMMENT_USER_ID)
                    .table(Comment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Comment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Comment {
    Table,
    Id,
    Content,
    UserId,
    CharacterId,
    PlanetId,
    CreatedAt,
}
