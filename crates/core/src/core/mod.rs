/**
CSS-only interactive tabs: one radio input and one label per tab, panels
toggled purely by `:checked` + general-sibling selectors. No script in the
generated document.
*/
pub mod output;
pub mod tabset;
