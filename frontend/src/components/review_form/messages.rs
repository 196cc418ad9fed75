pub enum Msg {
    SetRating(Option<f64>),
    SetMessage(String),
    Submit,
    Close,
}
