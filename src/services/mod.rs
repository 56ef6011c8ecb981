/*
 * Responsibility
 * - ドメイン寄りのロジック (認証トークン検証 / lecture のユースケース)
 * - handler からはここの trait / 型だけを見る
 */
pub mod auth;
pub mod lectures;
