mod editing;
mod io;
mod rename;
mod selection;
mod support;
