/// Usage text for the interactive prompt
pub fn help_text() -> String {
    [
        "📖 Conversor de Pesos CLP",
        "Convierte pesos chilenos a monedas publicadas por mindicador.cl y grafica sus últimos valores.",
        "",
        "  monedas                      - Lista las monedas disponibles",
        "  convertir <monto> <codigo>   - Convierte <monto> CLP a la moneda <codigo>",
        "  <monto> <codigo>             - Igual que convertir",
        "  ayuda                        - Muestra esta ayuda",
        "  salir                        - Termina el programa",
    ]
    .join("\n")
}

pub fn execute() {
    println!("{}", help_text());
}
