use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Ticket supply and price must both be positive and within capacity")]
    InvalidConfiguration,
    #[msg("Ticket id is outside the issued range")]
    InvalidTicket,
    #[msg("Ticket has already been sold")]
    AlreadySold,
    #[msg("Account already owns a ticket")]
    AlreadyOwnsTicket,
    #[msg("Payment does not match the asking price")]
    IncorrectPayment,
    #[msg("Caller does not own this ticket")]
    NotOwner,
    #[msg("No swap offer is open for this ticket")]
    NoOfferExists,
    #[msg("Caller does not own any ticket")]
    NotATicketHolder,
    #[msg("Caller already owns the offered ticket")]
    SelfSwap,
    #[msg("Resale price must be positive")]
    InvalidPrice,
    #[msg("Ticket is not listed for resale")]
    NoListingExists,
    #[msg("Seller account is not the current ticket owner")]
    SellerMismatch,
    #[msg("Proceeds account is not the registry administrator")]
    AdministratorMismatch,
}
