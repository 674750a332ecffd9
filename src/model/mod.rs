/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// HTTP client and response handling
pub mod http;
/// Request models for API calls
pub mod requests;
